//! Plain-text rendering of a generated pattern using colour codes

use crate::io::configuration::UNKNOWN_COLOUR_CODE;
use crate::model::colour::ColourSpec;
use crate::pattern::row::TileRow;
use std::collections::HashMap;

/// Render one line per row, one colour code per tile, top row first
pub fn format_pattern(rows: &[TileRow], colour_model: &[ColourSpec]) -> String {
    let codes: HashMap<&str, char> = colour_model
        .iter()
        .map(|colour| (colour.name.as_str(), colour.code))
        .collect();

    let mut output = String::with_capacity(rows.iter().map(|row| row.tiles.len() + 1).sum());
    for row in rows {
        output.extend(row.tiles.iter().map(|tile| {
            codes
                .get(tile.colour.as_str())
                .copied()
                .unwrap_or(UNKNOWN_COLOUR_CODE)
        }));
        output.push('\n');
    }
    output
}

/// Count tiles per colour name, sorted by descending count then name
pub fn colour_tally(rows: &[TileRow]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tile in rows.iter().flat_map(|row| &row.tiles) {
        *counts.entry(tile.colour.as_str()).or_default() += 1;
    }

    let mut tally: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tally
}
