//! # Monitor Structures
//!
//! The live display device and its persisted projection.
//!
//! A monitor's displayed content is owned exclusively by its structure and
//! is replaced wholesale on every write. The persisted projection carries
//! only geometry and resolution across an unload: a monitor that leaves
//! active simulation comes back blank.

use argus_shared::{Extent2, IVec3, Side};
use serde::{Deserialize, Serialize};

/// Character-grid resolution of a monitor face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Characters per line.
    pub chars_per_line: i32,
    /// Number of lines.
    pub line_count: i32,
}

impl Resolution {
    /// Creates a new resolution.
    #[must_use]
    pub const fn new(chars_per_line: i32, line_count: i32) -> Self {
        Self {
            chars_per_line,
            line_count,
        }
    }

    /// The resolution as a 2-D extent (columns, lines).
    #[must_use]
    pub const fn as_extent(self) -> Extent2 {
        Extent2::new(self.chars_per_line, self.line_count)
    }
}

/// A live monitor assembled from placed blocks.
///
/// Holds exactly `resolution.line_count` lines at all times. Writes go
/// through [`MonitorStructure::set_content`], which replaces every line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorStructure {
    size: IVec3,
    front: Side,
    resolution: Resolution,
    mode: String,
    lines: Vec<String>,
}

impl MonitorStructure {
    /// Creates a freshly formed monitor with blank content.
    #[must_use]
    pub fn new(size: IVec3, front: Side, resolution: Resolution) -> Self {
        Self {
            size,
            front,
            resolution,
            mode: String::new(),
            lines: blank_lines(resolution.line_count),
        }
    }

    /// Block extent of the structure.
    #[must_use]
    pub const fn size(&self) -> IVec3 {
        self.size
    }

    /// Face the monitor renders toward.
    #[must_use]
    pub const fn front(&self) -> Side {
        self.front
    }

    /// Character-grid resolution.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Render-mode tag negotiated by the last write. Blank until the first
    /// write lands.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Currently displayed lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replaces the displayed content wholesale.
    ///
    /// Payloads shorter than the line count are padded with empty lines;
    /// longer payloads are truncated. The line count never changes.
    pub fn set_content(&mut self, mode: String, mut lines: Vec<String>) {
        let count = self.resolution.line_count.max(0) as usize;
        lines.truncate(count);
        lines.resize(count, String::new());
        self.mode = mode;
        self.lines = lines;
    }
}

/// Builds `line_count` empty lines.
#[must_use]
pub fn blank_lines(line_count: i32) -> Vec<String> {
    vec![String::new(); line_count.max(0) as usize]
}

/// Reduced projection of a monitor carried across an unload.
///
/// Excludes displayed content and render mode: restoring from this
/// projection always yields a blank device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedMonitorConfig {
    /// Block extent of the structure.
    pub size: IVec3,
    /// Face the monitor renders toward.
    pub front: Side,
    /// Characters per line.
    pub chars_per_line: i32,
    /// Number of lines.
    pub line_count: i32,
}

impl PersistedMonitorConfig {
    /// Projects the persistable slice of a live monitor.
    #[must_use]
    pub fn project(monitor: &MonitorStructure) -> Self {
        Self {
            size: monitor.size(),
            front: monitor.front(),
            chars_per_line: monitor.resolution().chars_per_line,
            line_count: monitor.resolution().line_count,
        }
    }

    /// Restores a live monitor with freshly blanked content.
    #[must_use]
    pub fn restore(&self) -> MonitorStructure {
        MonitorStructure::new(
            self.size,
            self.front,
            Resolution::new(self.chars_per_line, self.line_count),
        )
    }
}
