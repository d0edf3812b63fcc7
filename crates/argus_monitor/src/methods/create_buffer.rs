//! Creates an off-screen text buffer for a scripting program to compose
//! into.

use argus_shared::Extent2;

use super::{positive_extent, ModuleMethod};
use crate::buffer::TextBuffer;
use crate::error::ExecResult;
use crate::script::{ComputerContext, Parameters, ScriptValue};
use crate::store::MonitorStore;

const OPERATION: &str = "createOffScreenBuffer";

/// The `createOffScreenBuffer(width, height)` operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct CreateOffScreenBufferMethod;

impl ModuleMethod for CreateOffScreenBufferMethod {
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
        &["width", "height"]
    }

    fn execute(
        &self,
        line: u32,
        _ctx: &ComputerContext,
        _store: &mut MonitorStore,
        params: &Parameters,
    ) -> ExecResult<ScriptValue> {
        let width = positive_extent(line, params, "width", OPERATION)?;
        let height = positive_extent(line, params, "height", OPERATION)?;

        Ok(ScriptValue::Buffer(TextBuffer::new(Extent2::new(
            width, height,
        ))))
    }
}
