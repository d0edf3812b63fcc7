//! # ARGUS Shared
//!
//! Spatial types common to every ARGUS crate.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - the world/entity framework
//! - anything that rasterizes to a screen
//!
//! If you need display types, put them in `argus_monitor`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod math;

pub use math::{BlockRegion, Direction, Extent2, IVec3, Side};
