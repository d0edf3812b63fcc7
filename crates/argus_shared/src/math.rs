//! Integer math for block-grid space.
//!
//! These are the canonical representations used in events and persisted
//! projections. Block positions are whole-number lattice coordinates; Y is
//! the vertical axis.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 3D integer vector - block positions and extents.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct IVec3 {
    /// X component
    pub x: i32,
    /// Y component (vertical)
    pub y: i32,
    /// Z component
    pub z: i32,
}

impl IVec3 {
    /// Creates a new IVec3
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// One in every component
    pub const ONE: Self = Self::new(1, 1, 1);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Largest component
    #[must_use]
    pub fn max_component(self) -> i32 {
        self.x.max(self.y).max(self.z)
    }
}

impl std::ops::Add for IVec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for IVec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// 2D integer extent - character and pixel resolutions.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Extent2 {
    /// Horizontal component
    pub x: i32,
    /// Vertical component
    pub y: i32,
}

impl Extent2 {
    /// Creates a new Extent2
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Zero extent
    pub const ZERO: Self = Self::new(0, 0);
}

/// The face of a block structure.
///
/// A monitor renders toward exactly one of these.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Negative Z face
    Front = 0,
    /// Positive Z face
    Back = 1,
    /// Negative X face
    Left = 2,
    /// Positive X face
    Right = 3,
    /// Positive Y face
    Top = 4,
    /// Negative Y face
    Bottom = 5,
}

/// An absolute axis direction in world space.
///
/// Scripting programs name directions as lowercase strings; the interop
/// layer parses them through [`Direction::from_name`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Negative Z
    North = 0,
    /// Positive Z
    South = 1,
    /// Positive X
    East = 2,
    /// Negative X
    West = 3,
    /// Positive Y
    Up = 4,
    /// Negative Y
    Down = 5,
}

impl Direction {
    /// Unit vector pointing along this direction.
    #[must_use]
    pub const fn vector(self) -> IVec3 {
        match self {
            Self::North => IVec3::new(0, 0, -1),
            Self::South => IVec3::new(0, 0, 1),
            Self::East => IVec3::new(1, 0, 0),
            Self::West => IVec3::new(-1, 0, 0),
            Self::Up => IVec3::new(0, 1, 0),
            Self::Down => IVec3::new(0, -1, 0),
        }
    }

    /// Parses a lowercase direction name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

/// An axis-aligned region of blocks, identified by its minimum corner and
/// size. Every component of `size` is at least 1 for a non-degenerate
/// region.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct BlockRegion {
    /// Minimum corner (inclusive)
    pub min: IVec3,
    /// Extent in blocks along each axis
    pub size: IVec3,
}

impl BlockRegion {
    /// Creates a region from its minimum corner and size.
    #[must_use]
    pub const fn new(min: IVec3, size: IVec3) -> Self {
        Self { min, size }
    }

    /// Creates a region spanning two inclusive corners.
    #[must_use]
    pub fn from_min_max(min: IVec3, max: IVec3) -> Self {
        Self {
            min,
            size: IVec3::new(max.x - min.x + 1, max.y - min.y + 1, max.z - min.z + 1),
        }
    }

    /// Maximum corner (inclusive).
    #[must_use]
    pub fn max(&self) -> IVec3 {
        self.min + self.size - IVec3::ONE
    }

    /// Whether the given block position lies inside this region.
    #[must_use]
    pub fn contains(&self, pos: IVec3) -> bool {
        let max = self.max();
        pos.x >= self.min.x
            && pos.x <= max.x
            && pos.y >= self.min.y
            && pos.y <= max.y
            && pos.z >= self.min.z
            && pos.z <= max.z
    }

    /// Number of blocks in the region.
    #[must_use]
    pub fn block_count(&self) -> i64 {
        i64::from(self.size.x) * i64::from(self.size.y) * i64::from(self.size.z)
    }

    /// Iterates every block position in the region, X-major.
    pub fn blocks(&self) -> impl Iterator<Item = IVec3> + '_ {
        let min = self.min;
        let max = self.max();
        (min.x..=max.x).flat_map(move |x| {
            (min.y..=max.y)
                .flat_map(move |y| (min.z..=max.z).map(move |z| IVec3::new(x, y, z)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ivec3_operations() {
        let a = IVec3::new(1, 2, 3);
        let b = IVec3::new(4, 5, 6);

        let sum = a + b;
        assert_eq!(sum, IVec3::new(5, 7, 9));

        let diff = b - a;
        assert_eq!(diff, IVec3::new(3, 3, 3));

        assert_eq!(b.max_component(), 6);
    }

    #[test]
    fn test_direction_vectors_are_units() {
        for dir in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::Up,
            Direction::Down,
        ] {
            let v = dir.vector();
            assert_eq!(v.x.abs() + v.y.abs() + v.z.abs(), 1);
        }
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(Direction::from_name("north"), Some(Direction::North));
        assert_eq!(Direction::from_name("down"), Some(Direction::Down));
        assert_eq!(Direction::from_name("NORTH"), None);
        assert_eq!(Direction::from_name("sideways"), None);
    }

    #[test]
    fn test_region_extents() {
        let region = BlockRegion::new(IVec3::new(10, 64, -3), IVec3::new(3, 1, 2));
        assert_eq!(region.max(), IVec3::new(12, 64, -2));
        assert_eq!(region.block_count(), 6);
        assert!(region.contains(IVec3::new(11, 64, -3)));
        assert!(!region.contains(IVec3::new(13, 64, -3)));
    }

    #[test]
    fn test_region_block_iteration() {
        let region = BlockRegion::new(IVec3::new(0, 0, 0), IVec3::new(2, 1, 2));
        let blocks: Vec<IVec3> = region.blocks().collect();
        assert_eq!(blocks.len(), 4);
        assert!(blocks.contains(&IVec3::new(1, 0, 1)));
    }

    #[test]
    fn test_region_from_min_max() {
        let region = BlockRegion::from_min_max(IVec3::new(1, 1, 1), IVec3::new(3, 1, 2));
        assert_eq!(region.size, IVec3::new(3, 1, 2));
    }
}
