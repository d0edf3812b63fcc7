//! Pushes a composed off-screen buffer at a text-mode monitor in one
//! write.

use super::ModuleMethod;
use crate::error::{ExecResult, ExecutionError, ExecutionErrorKind};
use crate::script::{ComputerContext, Parameters, ScriptValue};
use crate::store::MonitorStore;
use crate::validators::{validate_text_buffer, validate_text_render_binding};

/// The `drawBuffer(renderBinding, offScreenBuffer)` operation.
///
/// Fails without touching the device when the buffer exceeds the device
/// resolution in either axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrawBufferMethod;

impl ModuleMethod for DrawBufferMethod {
    fn cpu_cycle_duration(&self) -> u32 {
        50
    }

    fn minimum_execution_time(
        &self,
        line: u32,
        ctx: &ComputerContext,
        store: &MonitorStore,
        params: &Parameters,
    ) -> ExecResult<u32> {
        let sink =
            validate_text_render_binding(line, ctx, store, params, "renderBinding", "drawBuffer")?;
        Ok(if sink.is_instant_rendering() { 0 } else { 100 })
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &["renderBinding", "offScreenBuffer"]
    }

    fn execute(
        &self,
        line: u32,
        ctx: &ComputerContext,
        store: &mut MonitorStore,
        params: &Parameters,
    ) -> ExecResult<ScriptValue> {
        let sink =
            validate_text_render_binding(line, ctx, store, params, "renderBinding", "drawBuffer")?;
        let buffer = validate_text_buffer(line, params, "offScreenBuffer", "drawBuffer")?;

        let size = buffer.size();
        let max_characters = sink.max_characters();
        if size.x > max_characters.x || size.y > max_characters.y {
            return Err(ExecutionError::new(line, ExecutionErrorKind::BufferTooLarge));
        }

        sink.set_data(line, store, buffer.lines().to_vec())?;

        Ok(ScriptValue::Null)
    }
}
