//! Single-row generation: palette selection, weighted duplicates and rotation

use crate::io::error::{Result, missing_value};
use crate::math::random::Randomizer;
use crate::model::palette::Palette;
use crate::pattern::dispenser::ColourDispenser;
use tracing::trace;

/// One coloured tile of the generated pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    /// 1-based column the tile occupies
    pub key: usize,
    /// 1-based row, counted upward from the bottom
    pub row: usize,
    /// Colour name from the colour model
    pub colour: String,
}

/// A full row of tiles ordered left to right
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileRow {
    /// 1-based row, counted upward from the bottom
    pub key: usize,
    /// Tiles in column order
    pub tiles: Vec<Tile>,
}

/// Row-shaping settings shared by every row of a generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSettings {
    /// Tiles per row
    pub column_count: usize,
    /// Colours in the base group
    pub group_size: usize,
    /// Upper bound for weighted duplicates
    pub complexity: usize,
    /// Right rotation of the finished row
    pub rotation: usize,
}

/// Pick the colours a row dispenses from
///
/// Favourites come first so every row's group holds all of them when the
/// group is large enough; the shuffles still vary which others make the cut.
/// With `complexity > 0` up to `complexity - 1` weight-biased duplicates are
/// appended, never as many as a whole group.
pub fn row_colours(
    palette: &Palette,
    settings: &RowSettings,
    randomizer: &mut Randomizer,
) -> Vec<String> {
    let mut colours = randomizer.shuffle(&palette.favourites);
    colours.extend(randomizer.shuffle(&palette.others));
    colours.truncate(settings.group_size);

    if settings.complexity > 0 {
        let duplicates = (randomizer.next_int() as usize % settings.complexity)
            .checked_rem(settings.group_size)
            .unwrap_or(0);
        let weighted = randomizer.weighted_shuffle(&colours, &palette.weights);
        colours.extend(weighted.into_iter().take(duplicates));
    }

    colours
}

/// Generate the row with the given key
///
/// Position `i` in dispensing order is keyed `((i + rotation) mod columns) + 1`
/// and the finished row is rotated right by `rotation`, so the tile at array
/// index `j` always carries key `j + 1`.
///
/// # Errors
///
/// Returns `MissingValue` if the palette yields no colours to dispense
pub fn generate_row(
    key: usize,
    palette: &Palette,
    settings: &RowSettings,
    randomizer: &mut Randomizer,
) -> Result<TileRow> {
    let colours = row_colours(palette, settings, randomizer);
    trace!(row = key, ?colours, "row colours selected");

    let columns = settings.column_count;
    let mut dispenser = ColourDispenser::new(colours, randomizer);
    let mut tiles = Vec::with_capacity(columns);

    for i in 0..columns {
        let colour = dispenser
            .next()
            .ok_or_else(|| missing_value("dispensed colour"))?;
        tiles.push(Tile {
            key: ((i + settings.rotation) % columns) + 1,
            row: key,
            colour,
        });
    }

    if columns > 0 {
        tiles.rotate_right(settings.rotation % columns);
    }

    Ok(TileRow { key, tiles })
}
