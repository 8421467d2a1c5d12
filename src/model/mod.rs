//! Parameter record and the values it holds

/// Edits applied to a parameter record
pub mod action;
/// Colour entries and hexcode parsing
pub mod colour;
/// Enabled colours split for row selection
pub mod palette;
/// Pattern parameters and validation
pub mod parameters;
/// Grid cells and rectangular regions
pub mod region;
