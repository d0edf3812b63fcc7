//! # Formation Rules
//!
//! Tunable limits for monitor formation, loaded from TOML the same way the
//! rest of the engine loads balance data. Compiled-in defaults apply when
//! no file is present.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::MAX_MONITOR_DIMENSION;

/// Limits applied when a candidate region tries to become a monitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationRules {
    /// Largest allowed extent of a monitor plane, in blocks.
    pub max_dimension: i32,
}

impl Default for FormationRules {
    fn default() -> Self {
        Self {
            max_dimension: MAX_MONITOR_DIMENSION,
        }
    }
}

impl FormationRules {
    /// Parses formation rules from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the text does not parse or the
    /// limit is out of range.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let rules: Self = toml::from_str(raw)
            .map_err(|e| ConfigError::Invalid(format!("formation rules: {e}")))?;
        if rules.max_dimension < 1 {
            return Err(ConfigError::Invalid(format!(
                "max_dimension must be at least 1, got {}",
                rules.max_dimension
            )));
        }
        Ok(rules)
    }
}
