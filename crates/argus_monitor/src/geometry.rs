//! # Monitor Geometry Rules
//!
//! Pure predicates and derivations over candidate block regions. Nothing
//! here touches the store or the world; formation policy lives in the
//! lifecycle system.
//!
//! A legal monitor is a flat plane one block thick: the smaller of its two
//! horizontal extents must be exactly 1, and no extent may exceed the
//! configured maximum. Each block contributes an 8x5 cell of character
//! glyphs to the render resolution.

use argus_shared::{IVec3, Side};

use crate::structure::Resolution;

/// Default cap on any extent of a monitor plane, in blocks.
pub const MAX_MONITOR_DIMENSION: i32 = 5;

/// Character columns contributed by one block.
pub const GLYPHS_PER_BLOCK_X: i32 = 8;

/// Character lines contributed by one block.
pub const GLYPHS_PER_BLOCK_Y: i32 = 5;

/// Whether a candidate region of the given extent is a legal monitor
/// shape.
///
/// Accepts iff every extent is at least 1, the smaller of the two
/// horizontal extents is exactly 1, and the largest extent does not
/// exceed `max_dimension`.
#[must_use]
pub fn is_valid_monitor_shape(size: IVec3, max_dimension: i32) -> bool {
    if size.x < 1 || size.y < 1 || size.z < 1 {
        return false;
    }
    size.x.min(size.z) == 1 && size.max_component() <= max_dimension
}

/// Whether a block's candidate tag set marks it as monitor material.
///
/// Named replacement for the inline predicate the detection recipe runs
/// over each block entity.
#[must_use]
pub fn is_monitor_candidate<S: AsRef<str>>(tags: &[S], candidate_key: &str) -> bool {
    tags.iter().any(|tag| tag.as_ref() == candidate_key)
}

/// Which face a monitor of the given extent renders toward.
///
/// The wider in-plane axis wins; the x == z tie resolves to `Left` as a
/// fixed default.
#[must_use]
pub fn front_side(size: IVec3) -> Side {
    if size.x > size.z {
        Side::Front
    } else {
        Side::Left
    }
}

/// Character-grid resolution of a monitor of the given extent.
///
/// Width is the larger horizontal extent, height is the vertical extent;
/// each block is an 8x5 glyph cell.
#[must_use]
pub fn monitor_resolution(size: IVec3) -> Resolution {
    let width = size.x.max(size.z);
    let height = size.y;
    Resolution::new(width * GLYPHS_PER_BLOCK_X, height * GLYPHS_PER_BLOCK_Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_shapes_within_limit_are_valid() {
        for width in 1..=MAX_MONITOR_DIMENSION {
            for height in 1..=MAX_MONITOR_DIMENSION {
                assert!(is_valid_monitor_shape(
                    IVec3::new(width, height, 1),
                    MAX_MONITOR_DIMENSION
                ));
                assert!(is_valid_monitor_shape(
                    IVec3::new(1, height, width),
                    MAX_MONITOR_DIMENSION
                ));
            }
        }
    }

    #[test]
    fn test_thick_shapes_are_rejected() {
        assert!(!is_valid_monitor_shape(
            IVec3::new(2, 1, 2),
            MAX_MONITOR_DIMENSION
        ));
        assert!(!is_valid_monitor_shape(
            IVec3::new(3, 3, 3),
            MAX_MONITOR_DIMENSION
        ));
    }

    #[test]
    fn test_oversized_shapes_are_rejected() {
        assert!(!is_valid_monitor_shape(
            IVec3::new(6, 1, 1),
            MAX_MONITOR_DIMENSION
        ));
        assert!(!is_valid_monitor_shape(
            IVec3::new(1, 6, 3),
            MAX_MONITOR_DIMENSION
        ));
        // A custom cap changes the verdict.
        assert!(is_valid_monitor_shape(IVec3::new(6, 1, 1), 8));
    }

    #[test]
    fn test_degenerate_shapes_are_rejected() {
        assert!(!is_valid_monitor_shape(
            IVec3::new(0, 1, 1),
            MAX_MONITOR_DIMENSION
        ));
        assert!(!is_valid_monitor_shape(
            IVec3::new(1, 0, 1),
            MAX_MONITOR_DIMENSION
        ));
    }

    #[test]
    fn test_front_side_follows_wider_axis() {
        assert_eq!(front_side(IVec3::new(3, 1, 2)), Side::Front);
        assert_eq!(front_side(IVec3::new(2, 1, 3)), Side::Left);
        // Tie resolves to the fixed default.
        assert_eq!(front_side(IVec3::new(1, 4, 1)), Side::Left);
    }

    #[test]
    fn test_resolution_formulas() {
        let res = monitor_resolution(IVec3::new(3, 1, 2));
        assert_eq!(res, Resolution::new(24, 5));

        let res = monitor_resolution(IVec3::new(1, 4, 5));
        assert_eq!(res, Resolution::new(40, 20));
    }

    #[test]
    fn test_candidate_tag_check() {
        let tags = ["argus:monitor".to_string(), "argus:fancy".to_string()];
        assert!(is_monitor_candidate(&tags, "argus:monitor"));
        assert!(!is_monitor_candidate(&tags, "argus:other"));
        assert!(!is_monitor_candidate::<String>(&[], "argus:monitor"));
    }
}
