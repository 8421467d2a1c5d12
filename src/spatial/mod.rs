//! Pixel geometry of a laid-out pattern

/// Memoized hole rectangles
pub mod cache;
/// Points, sizes and rectangles
pub mod geometry;
/// Cell location, offset stepping, crops and holes
pub mod layout;

pub use layout::Layout;
