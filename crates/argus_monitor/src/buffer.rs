//! # Off-Screen Text Buffer
//!
//! A caller-owned character grid scripting programs compose into before
//! pushing the whole thing at a device in one write. Owned by scripting
//! state, passed by reference into rendering calls; never stored by this
//! crate.

use argus_shared::Extent2;

/// A fixed-size off-screen character grid.
///
/// Holds exactly `size.y` lines, each at most `size.x` characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBuffer {
    size: Extent2,
    lines: Vec<String>,
}

impl TextBuffer {
    /// Creates a blank buffer of the given character extent.
    #[must_use]
    pub fn new(size: Extent2) -> Self {
        Self {
            size,
            lines: vec![String::new(); size.y.max(0) as usize],
        }
    }

    /// Character extent of the buffer (columns, lines).
    #[must_use]
    pub const fn size(&self) -> Extent2 {
        self.size
    }

    /// The buffered lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replaces one line, truncated to the buffer width.
    ///
    /// Returns `false` if `index` is outside the buffer.
    pub fn set_line(&mut self, index: usize, text: &str) -> bool {
        let width = self.size.x.max(0) as usize;
        let Some(slot) = self.lines.get_mut(index) else {
            return false;
        };
        *slot = text.chars().take(width).collect();
        true
    }

    /// Blanks every line.
    pub fn clear(&mut self) {
        for slot in &mut self.lines {
            slot.clear();
        }
    }
}
