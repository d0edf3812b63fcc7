//! # Command Sinks
//!
//! Call-scoped write capabilities bound to one resolved device. A sink is
//! created fresh by binding resolution, used for at most one call, and
//! never persisted. Writes replace the device's stored content wholesale
//! and record the sink's required-mode tag on the structure.

use argus_shared::Extent2;

use crate::error::{ExecResult, ExecutionError, ExecutionErrorKind};
use crate::store::{MonitorStore, StructureId};

/// Write capability for a text-mode device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextCommandSink {
    target: StructureId,
    max_characters: Extent2,
    required_mode: String,
    instant_rendering: bool,
}

impl TextCommandSink {
    pub(crate) fn new(
        target: StructureId,
        max_characters: Extent2,
        required_mode: String,
        instant_rendering: bool,
    ) -> Self {
        Self {
            target,
            max_characters,
            required_mode,
            instant_rendering,
        }
    }

    /// Device resolution in characters (columns, lines), sampled at sink
    /// creation.
    #[must_use]
    pub const fn max_characters(&self) -> Extent2 {
        self.max_characters
    }

    /// Render-mode tag this sink stamps on every write.
    #[must_use]
    pub fn required_mode(&self) -> &str {
        &self.required_mode
    }

    /// Whether writes through this sink cost no minimum wall time.
    #[must_use]
    pub const fn is_instant_rendering(&self) -> bool {
        self.instant_rendering
    }

    /// Replaces the device content with line-oriented character data.
    ///
    /// # Errors
    ///
    /// Fails with `TargetNotFound` if the bound structure no longer
    /// exists.
    pub fn set_data(
        &self,
        line: u32,
        store: &mut MonitorStore,
        lines: Vec<String>,
    ) -> ExecResult<()> {
        let Some(monitor) = store.monitor_mut(self.target) else {
            return Err(ExecutionError::new(line, ExecutionErrorKind::TargetNotFound));
        };
        monitor.set_content(self.required_mode.clone(), lines);
        Ok(())
    }
}

/// Write capability for a graphics-mode device.
///
/// Payloads are opaque encoded draw output; this core stores them, the
/// out-of-scope rasterizer interprets them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphicsCommandSink {
    target: StructureId,
    resolution: Extent2,
    required_mode: String,
    instant_rendering: bool,
}

impl GraphicsCommandSink {
    pub(crate) fn new(
        target: StructureId,
        resolution: Extent2,
        required_mode: String,
        instant_rendering: bool,
    ) -> Self {
        Self {
            target,
            resolution,
            required_mode,
            instant_rendering,
        }
    }

    /// Device resolution, sampled at sink creation.
    #[must_use]
    pub const fn resolution(&self) -> Extent2 {
        self.resolution
    }

    /// Render-mode tag this sink stamps on every write.
    #[must_use]
    pub fn required_mode(&self) -> &str {
        &self.required_mode
    }

    /// Whether writes through this sink cost no minimum wall time.
    #[must_use]
    pub const fn is_instant_rendering(&self) -> bool {
        self.instant_rendering
    }

    /// Replaces the device content with encoded draw output.
    ///
    /// # Errors
    ///
    /// Fails with `TargetNotFound` if the bound structure no longer
    /// exists.
    pub fn set_data(
        &self,
        line: u32,
        store: &mut MonitorStore,
        payload: Vec<String>,
    ) -> ExecResult<()> {
        let Some(monitor) = store.monitor_mut(self.target) else {
            return Err(ExecutionError::new(line, ExecutionErrorKind::TargetNotFound));
        };
        monitor.set_content(self.required_mode.clone(), payload);
        Ok(())
    }
}
