//! Command line, configuration, errors and pattern output

/// Command-line interface and generation runner
pub mod cli;
/// Default parameter values and rendering constants
pub mod configuration;
/// Error types for the crate
pub mod error;
/// PNG export
pub mod image;
/// Text grid and colour tally output
pub mod text;
