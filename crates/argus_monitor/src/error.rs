//! # Monitor Error Types
//!
//! All failures in this crate are scoped to a single call. Scripting-facing
//! failures carry the source line of the invoking call and render as the
//! line-numbered strings the interpreter reports back to the program.

use thiserror::Error;

/// What went wrong inside a single scripting call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionErrorKind {
    /// The supplied value lacks the capability the operation requires.
    #[error("expected {expected} in parameter [{parameter}] of function [{operation}]")]
    BindingTypeMismatch {
        /// Capability the operation needed.
        expected: &'static str,
        /// Parameter slot that held the wrong value.
        parameter: &'static str,
        /// Operation that performed the check.
        operation: &'static str,
    },

    /// A spatial lookup found no device at the target location.
    #[error("Unable to locate device that could be rendered on")]
    TargetNotFound,

    /// An off-screen payload exceeds the device resolution.
    #[error("OffScreenBuffer does not fit on the screen")]
    BufferTooLarge,

    /// A parameter was missing or held the wrong primitive type.
    #[error("invalid value in parameter [{parameter}] of function [{operation}]")]
    InvalidParameter {
        /// Parameter slot that was missing or mis-typed.
        parameter: &'static str,
        /// Operation that required it.
        operation: &'static str,
    },
}

/// A scripting-level execution failure.
///
/// Surfaced synchronously to the calling operation; never retried here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ExecutionError {
    /// Source line of the invoking call.
    pub line: u32,
    /// What went wrong.
    pub kind: ExecutionErrorKind,
}

impl ExecutionError {
    /// Creates an execution failure for the given call line.
    #[must_use]
    pub const fn new(line: u32, kind: ExecutionErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Result type for scripting-facing operations.
pub type ExecResult<T> = Result<T, ExecutionError>;

/// Errors raised while loading monitor configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration file did not parse or held out-of-range values.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_renders_line_number() {
        let err = ExecutionError::new(12, ExecutionErrorKind::TargetNotFound);
        assert_eq!(
            err.to_string(),
            "line 12: Unable to locate device that could be rendered on"
        );
    }

    #[test]
    fn test_mismatch_names_parameter_and_operation() {
        let err = ExecutionError::new(
            3,
            ExecutionErrorKind::BindingTypeMismatch {
                expected: "TEXT_RENDER_BINDING",
                parameter: "renderBinding",
                operation: "clear",
            },
        );
        let rendered = err.to_string();
        assert!(rendered.contains("renderBinding"));
        assert!(rendered.contains("clear"));
        assert!(rendered.contains("TEXT_RENDER_BINDING"));
    }
}
