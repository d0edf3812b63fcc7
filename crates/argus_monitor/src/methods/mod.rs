//! # Scripting Methods
//!
//! The operations an in-world computer can invoke against monitors. Each
//! method declares scheduling metadata (CPU cycles, minimum wall time)
//! the external runtime bills against the calling program; the metadata
//! is reported, never enforced here.

mod clear;
mod clear_graphics;
mod create_buffer;
mod draw_buffer;
mod get_render_binding;

pub use clear::ClearMethod;
pub use clear_graphics::ClearGraphicsMethod;
pub use create_buffer::CreateOffScreenBufferMethod;
pub use draw_buffer::DrawBufferMethod;
pub use get_render_binding::GetRenderBindingMethod;

use crate::error::{ExecResult, ExecutionError, ExecutionErrorKind};
use crate::script::{ComputerContext, Parameters, ScriptValue};
use crate::store::MonitorStore;

/// A scripting-invocable operation with execution-timing metadata.
///
/// `line` is the source line of the invoking call; it tags every failure
/// the operation raises.
pub trait ModuleMethod {
    /// CPU cycles the external runtime bills for this call.
    fn cpu_cycle_duration(&self) -> u32;

    /// Minimum wall time in milliseconds the runtime schedules for this
    /// call. May resolve the bound device to consult its
    /// instant-rendering flag.
    ///
    /// # Errors
    ///
    /// Propagates binding-resolution failures when the cost depends on
    /// the device.
    fn minimum_execution_time(
        &self,
        line: u32,
        ctx: &ComputerContext,
        store: &MonitorStore,
        params: &Parameters,
    ) -> ExecResult<u32>;

    /// Names of the parameters this operation accepts, in call order.
    fn parameter_names(&self) -> &'static [&'static str];

    /// Runs the operation against the store.
    ///
    /// # Errors
    ///
    /// Any [`crate::error::ExecutionError`] the validators or sinks
    /// raise; all are surfaced synchronously to the interpreter.
    fn execute(
        &self,
        line: u32,
        ctx: &ComputerContext,
        store: &mut MonitorStore,
        params: &Parameters,
    ) -> ExecResult<ScriptValue>;
}

/// Reads a parameter as a strictly positive i32 extent.
fn positive_extent(
    line: u32,
    params: &Parameters,
    parameter: &'static str,
    operation: &'static str,
) -> ExecResult<i32> {
    params
        .get(parameter)
        .and_then(ScriptValue::as_int)
        .and_then(|value| i32::try_from(value).ok())
        .filter(|value| *value >= 1)
        .ok_or_else(|| {
            ExecutionError::new(
                line,
                ExecutionErrorKind::InvalidParameter {
                    parameter,
                    operation,
                },
            )
        })
}
