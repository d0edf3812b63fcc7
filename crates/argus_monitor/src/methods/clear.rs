//! Clears a text-mode monitor back to blank lines.

use super::ModuleMethod;
use crate::error::ExecResult;
use crate::script::{ComputerContext, Parameters, ScriptValue};
use crate::store::MonitorStore;
use crate::structure::blank_lines;
use crate::validators::validate_text_render_binding;

/// The `clear(renderBinding)` operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClearMethod;

impl ModuleMethod for ClearMethod {
    fn cpu_cycle_duration(&self) -> u32 {
        50
    }

    fn minimum_execution_time(
        &self,
        _line: u32,
        _ctx: &ComputerContext,
        _store: &MonitorStore,
        _params: &Parameters,
    ) -> ExecResult<u32> {
        Ok(100)
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
        let sink = validate_text_render_binding(line, ctx, store, params, "renderBinding", "clear")?;

        let line_count = sink.max_characters().y;
        sink.set_data(line, store, blank_lines(line_count))?;

        Ok(ScriptValue::Null)
    }
}
