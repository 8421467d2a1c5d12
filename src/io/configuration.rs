//! Layout constants and default parameter values

use crate::model::colour::ColourSpec;

// Layout units
/// Pixel size of one basis unit at 100% magnification
pub const BASIS_UNIT_PX: f64 = 16.0;
/// Grout line thickness in pixels
pub const GROUT_PX: f64 = 2.0;
/// Magnification percentage used when none is given
pub const DEFAULT_MAGNIFICATION: f64 = 100.0;
/// Multiplier applied to the basis unit for the short side of a tile
pub const DEFAULT_BASIS_FACTOR: f64 = 1.0;

// Parameter bounds
/// Largest permitted offset step count
pub const MAX_OFFSET: usize = 10;
/// Largest permitted aspect ratio magnitude
pub const MAX_ASPECT_RATIO: i32 = 10;
/// Largest permitted colour weight
pub const MAX_WEIGHT: u32 = 9;
/// Largest exported image side in pixels
pub const MAX_CANVAS_PX: f64 = 16384.0;

// Application defaults
/// Seed of the documented default pattern
pub const DEFAULT_SEED: &str = "Oceani";
/// Default number of tile rows
pub const DEFAULT_ROW_COUNT: usize = 8;
/// Default number of tile columns
pub const DEFAULT_COLUMN_COUNT: usize = 34;
/// Default number of weighted duplicates considered per row
pub const DEFAULT_COMPLEXITY: usize = 1;
/// Default tile aspect ratio (wide tiles)
pub const DEFAULT_ASPECT_RATIO: i32 = 4;
/// Default offset (half-brick)
pub const DEFAULT_OFFSET: usize = 2;
/// Default number of colours in a row's group
pub const DEFAULT_GROUP_SIZE: usize = 6;
/// Default grout colour
pub const DEFAULT_GROUT: &str = "#d9d9d9";

/// Colour code printed for tiles whose colour is not in the model
pub const UNKNOWN_COLOUR_CODE: char = '?';

/// The eleven-colour default palette, six of which are enabled
pub fn default_colour_model() -> Vec<ColourSpec> {
    vec![
        ColourSpec::new("Arctic", "#dfe9ee", 'A', true, 5, false),
        ColourSpec::new("Aqua", "#5fc4c9", 'Q', true, 7, true),
        ColourSpec::new("Teal", "#1f8a8a", 'T', true, 5, false),
        ColourSpec::new("Navy", "#1d3557", 'N', true, 3, false),
        ColourSpec::new("Sand", "#e9d8a6", 'S', true, 4, false),
        ColourSpec::new("Coral", "#ee6c4d", 'C', true, 2, false),
        ColourSpec::new("Black", "#111111", 'K', false, 1, false),
        ColourSpec::new("Slate", "#6c757d", 'L', false, 3, false),
        ColourSpec::new("Sage", "#8fb996", 'G', false, 5, false),
        ColourSpec::new("Ochre", "#cc8b3c", 'O', false, 4, false),
        ColourSpec::new("Plum", "#7b4b94", 'P', false, 2, false),
    ]
}
