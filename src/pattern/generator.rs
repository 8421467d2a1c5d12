//! Whole-pattern generation, bottom row first
//!
//! One randomizer is consumed row by row starting from the bottom course, so
//! the bottom `N` rows only ever see the first draws of the stream. Growing
//! the row count therefore adds rows at the top and leaves every existing row,
//! including its key, untouched.

use crate::io::error::Result;
use crate::math::random::Randomizer;
use crate::model::palette::Palette;
use crate::model::parameters::Parameters;
use crate::pattern::row::{RowSettings, TileRow, generate_row};
use tracing::debug;

/// Generate every row of the pattern, ordered top to bottom
///
/// The returned rows carry keys `row_count` down to `1`.
///
/// # Errors
///
/// Returns `MissingValue` if no colour is enabled
pub fn generate(parameters: &Parameters) -> Result<Vec<TileRow>> {
    let palette = Palette::from_colour_model(&parameters.colour_model);
    let settings = RowSettings {
        column_count: parameters.column_count,
        group_size: parameters.group_size,
        complexity: parameters.complexity,
        rotation: parameters.rotation,
    };
    let mut randomizer = Randomizer::new(&parameters.seed);

    debug!(
        seed = %parameters.seed,
        rows = parameters.row_count,
        columns = parameters.column_count,
        colours = palette.len(),
        "generating pattern"
    );

    let mut rows = Vec::with_capacity(parameters.row_count);
    for key in 1..=parameters.row_count {
        rows.push(generate_row(key, &palette, &settings, &mut randomizer)?);
    }
    rows.reverse();

    Ok(rows)
}
