//! Hands a scripting program a relative text binding for a neighboring
//! device.

use argus_shared::{Direction, Extent2};

use super::{positive_extent, ModuleMethod};
use crate::binding::RenderBinding;
use crate::error::{ExecResult, ExecutionError, ExecutionErrorKind};
use crate::script::{ComputerContext, Parameters, ScriptValue};
use crate::store::MonitorStore;

const OPERATION: &str = "getRenderBinding";

/// The `getRenderBinding(direction, width, height)` operation.
///
/// The returned binding re-resolves the device from the computer's
/// location on every call, so it keeps working when the neighboring
/// monitor is rebuilt.
#[derive(Clone, Copy, Debug, Default)]
pub struct GetRenderBindingMethod;

impl ModuleMethod for GetRenderBindingMethod {
    fn cpu_cycle_duration(&self) -> u32 {
        10
    }

    fn minimum_execution_time(
        &self,
        _line: u32,
        _ctx: &ComputerContext,
        _store: &MonitorStore,
        _params: &Parameters,
    ) -> ExecResult<u32> {
        Ok(10)
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &["direction", "width", "height"]
    }

    fn execute(
        &self,
        line: u32,
        _ctx: &ComputerContext,
        _store: &mut MonitorStore,
        params: &Parameters,
    ) -> ExecResult<ScriptValue> {
        let direction = params
            .get("direction")
            .and_then(ScriptValue::as_str)
            .and_then(Direction::from_name)
            .ok_or_else(|| {
                ExecutionError::new(
                    line,
                    ExecutionErrorKind::InvalidParameter {
                        parameter: "direction",
                        operation: OPERATION,
                    },
                )
            })?;

        let width = positive_extent(line, params, "width", OPERATION)?;
        let height = positive_extent(line, params, "height", OPERATION)?;

        Ok(ScriptValue::Binding(RenderBinding::relative_text(
            direction,
            Extent2::new(width, height),
        )))
    }
}
