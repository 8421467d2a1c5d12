//! Pattern generation
//!
//! This module contains:
//! - The colour dispenser that repeats a row's group
//! - Row colour selection and rotation
//! - The whole-pattern generator

/// Group-repeating colour iterator
pub mod dispenser;
/// Whole-pattern generation
pub mod generator;
/// Row colour selection and tile rows
pub mod row;

pub use generator::generate;
pub use row::{Tile, TileRow};
