//! # Scripting Interop
//!
//! The thin slice of the scripting runtime this crate needs to see: the
//! dynamically-typed values the interpreter passes, the per-call parameter
//! map, and the invoking computer's placement. The interpreter itself is
//! an external collaborator.

use std::collections::HashMap;

use argus_shared::IVec3;

use crate::binding::RenderBinding;
use crate::buffer::TextBuffer;

/// Placement of the invoking computer, supplied by the interpreter on
/// every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputerContext {
    /// Block position of the computer.
    pub location: IVec3,
}

impl ComputerContext {
    /// Context for a computer at the given block.
    #[must_use]
    pub const fn at(location: IVec3) -> Self {
        Self { location }
    }
}

/// A dynamically-typed value crossing the scripting boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptValue {
    /// Absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A string.
    Str(String),
    /// A render-binding capability object.
    Binding(RenderBinding),
    /// An off-screen text buffer.
    Buffer(TextBuffer),
}

impl ScriptValue {
    /// The integer inside, if this is an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The string inside, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The render binding inside, if this is one.
    #[must_use]
    pub const fn as_binding(&self) -> Option<&RenderBinding> {
        match self {
            Self::Binding(binding) => Some(binding),
            _ => None,
        }
    }

    /// The text buffer inside, if this is one.
    #[must_use]
    pub const fn as_buffer(&self) -> Option<&TextBuffer> {
        match self {
            Self::Buffer(buffer) => Some(buffer),
            _ => None,
        }
    }
}

/// Per-call parameter map, name to value.
#[derive(Clone, Debug, Default)]
pub struct Parameters {
    values: HashMap<String, ScriptValue>,
}

impl Parameters {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with(mut self, name: &str, value: ScriptValue) -> Self {
        self.values.insert(name.to_string(), value);
        self
    }

    /// Sets a parameter.
    pub fn insert(&mut self, name: &str, value: ScriptValue) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ScriptValue> {
        self.values.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(ScriptValue::Int(7).as_int(), Some(7));
        assert_eq!(ScriptValue::Str("up".to_string()).as_str(), Some("up"));
        assert_eq!(ScriptValue::Null.as_int(), None);
        assert!(ScriptValue::Bool(true).as_binding().is_none());
    }

    #[test]
    fn test_parameter_lookup() {
        let params = Parameters::new()
            .with("width", ScriptValue::Int(3))
            .with("direction", ScriptValue::Str("east".to_string()));

        assert_eq!(params.get("width").and_then(ScriptValue::as_int), Some(3));
        assert!(params.get("missing").is_none());
    }
}
