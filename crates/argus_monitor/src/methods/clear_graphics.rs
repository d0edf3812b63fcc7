//! Clears a graphics-mode monitor back to an empty frame.

use super::ModuleMethod;
use crate::error::ExecResult;
use crate::script::{ComputerContext, Parameters, ScriptValue};
use crate::store::MonitorStore;
use crate::validators::validate_graphics_render_binding;

/// The `clearGraphics(renderBinding)` operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClearGraphicsMethod;

impl ModuleMethod for ClearGraphicsMethod {
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
        let sink = validate_graphics_render_binding(
            line,
            ctx,
            store,
            params,
            "renderBinding",
            "clearGraphics",
        )?;
        Ok(if sink.is_instant_rendering() { 0 } else { 100 })
    }

    fn parameter_names(&self) -> &'static [&'static str] {
        &["renderBinding"]
    }

    fn execute(
        &self,
        line: u32,
        ctx: &ComputerContext,
        store: &mut MonitorStore,
        params: &Parameters,
    ) -> ExecResult<ScriptValue> {
        let sink = validate_graphics_render_binding(
            line,
            ctx,
            store,
            params,
            "renderBinding",
            "clearGraphics",
        )?;

        sink.set_data(line, store, Vec::new())?;

        Ok(ScriptValue::Null)
    }
}
