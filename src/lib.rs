//! Seeded generator for mosaic tile patterns
//!
//! A pattern is a grid of coloured tiles laid in rows. Each row draws a small
//! group of colours from the enabled palette and repeats it across the row,
//! never opening a repetition with the colour that closed the previous one.
//! Everything is driven by a single seeded stream, so a seed and a parameter
//! record always reproduce the same pattern, and growing the row count only
//! adds rows on top of the existing ones.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Seeded random stream and shuffles
pub mod math;
/// Parameter record, colours, regions and actions that edit them
pub mod model;
/// Row and pattern generation
pub mod pattern;
/// Pixel geometry, layout and hole subtraction
pub mod spatial;

pub use io::error::{MosaicError, Result};
