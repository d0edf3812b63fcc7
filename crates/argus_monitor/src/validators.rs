//! # Call-Time Validators
//!
//! Every scripting method funnels its binding and buffer parameters
//! through these helpers, so capability checks, sink resolution and the
//! wording of failures are identical across operations.

use crate::binding::BindingCapability;
use crate::buffer::TextBuffer;
use crate::error::{ExecResult, ExecutionError, ExecutionErrorKind};
use crate::script::{ComputerContext, Parameters, ScriptValue};
use crate::sink::{GraphicsCommandSink, TextCommandSink};
use crate::store::MonitorStore;

/// Resolves a text-capable render binding parameter into a sink.
///
/// # Errors
///
/// `BindingTypeMismatch` if the parameter is missing, not a binding, or
/// not text-capable; whatever the binding's own resolution raises
/// otherwise.
pub fn validate_text_render_binding(
    line: u32,
    ctx: &ComputerContext,
    store: &MonitorStore,
    params: &Parameters,
    parameter: &'static str,
    operation: &'static str,
) -> ExecResult<TextCommandSink> {
    let binding = params
        .get(parameter)
        .and_then(ScriptValue::as_binding)
        .filter(|binding| binding.capability() == BindingCapability::TextRenderBinding)
        .ok_or_else(|| {
            ExecutionError::new(
                line,
                ExecutionErrorKind::BindingTypeMismatch {
                    expected: BindingCapability::TextRenderBinding.name(),
                    parameter,
                    operation,
                },
            )
        })?;
    binding.resolve_text(line, ctx, store)
}

/// Resolves a graphics-capable render binding parameter into a sink.
///
/// # Errors
///
/// `BindingTypeMismatch` if the parameter is missing, not a binding, or
/// not graphics-capable; whatever the binding's own resolution raises
/// otherwise.
pub fn validate_graphics_render_binding(
    line: u32,
    ctx: &ComputerContext,
    store: &MonitorStore,
    params: &Parameters,
    parameter: &'static str,
    operation: &'static str,
) -> ExecResult<GraphicsCommandSink> {
    let binding = params
        .get(parameter)
        .and_then(ScriptValue::as_binding)
        .filter(|binding| binding.capability() == BindingCapability::GraphicsRenderBinding)
        .ok_or_else(|| {
            ExecutionError::new(
                line,
                ExecutionErrorKind::BindingTypeMismatch {
                    expected: BindingCapability::GraphicsRenderBinding.name(),
                    parameter,
                    operation,
                },
            )
        })?;
    binding.resolve_graphics(line, ctx, store)
}

/// Extracts an off-screen text buffer parameter.
///
/// # Errors
///
/// `BindingTypeMismatch` if the parameter is missing or not a buffer.
pub fn validate_text_buffer<'p>(
    line: u32,
    params: &'p Parameters,
    parameter: &'static str,
    operation: &'static str,
) -> ExecResult<&'p TextBuffer> {
    params
        .get(parameter)
        .and_then(ScriptValue::as_buffer)
        .ok_or_else(|| {
            ExecutionError::new(
                line,
                ExecutionErrorKind::BindingTypeMismatch {
                    expected: "OFF_SCREEN_BUFFER",
                    parameter,
                    operation,
                },
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::RenderBinding;
    use crate::store::StructureId;
    use argus_shared::{Extent2, IVec3};

    #[test]
    fn test_missing_parameter_is_a_mismatch() {
        let store = MonitorStore::new();
        let ctx = ComputerContext::at(IVec3::ZERO);
        let params = Parameters::new();

        let err =
            validate_text_render_binding(5, &ctx, &store, &params, "renderBinding", "clear")
                .unwrap_err();
        assert!(matches!(
            err.kind,
            ExecutionErrorKind::BindingTypeMismatch {
                expected: "TEXT_RENDER_BINDING",
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_capability_is_a_mismatch() {
        let store = MonitorStore::new();
        let ctx = ComputerContext::at(IVec3::ZERO);
        let params = Parameters::new().with(
            "renderBinding",
            ScriptValue::Binding(RenderBinding::direct_graphics(StructureId::new(1), false)),
        );

        let err =
            validate_text_render_binding(5, &ctx, &store, &params, "renderBinding", "clear")
                .unwrap_err();
        assert!(matches!(
            err.kind,
            ExecutionErrorKind::BindingTypeMismatch { .. }
        ));
    }

    #[test]
    fn test_buffer_parameter_of_wrong_type_is_a_mismatch() {
        let params = Parameters::new().with("offScreenBuffer", ScriptValue::Int(3));

        let err =
            validate_text_buffer(2, &params, "offScreenBuffer", "drawBuffer").unwrap_err();
        assert!(matches!(
            err.kind,
            ExecutionErrorKind::BindingTypeMismatch {
                expected: "OFF_SCREEN_BUFFER",
                ..
            }
        ));
    }

    #[test]
    fn test_valid_buffer_parameter_passes() {
        let params = Parameters::new().with(
            "offScreenBuffer",
            ScriptValue::Buffer(TextBuffer::new(Extent2::new(8, 5))),
        );

        let buffer = validate_text_buffer(2, &params, "offScreenBuffer", "drawBuffer").unwrap();
        assert_eq!(buffer.size(), Extent2::new(8, 5));
    }
}
