//! The immutable parameter record driving generation and layout

use crate::io::configuration::{
    DEFAULT_ASPECT_RATIO, DEFAULT_COLUMN_COUNT, DEFAULT_COMPLEXITY, DEFAULT_GROUP_SIZE,
    DEFAULT_GROUT, DEFAULT_OFFSET, DEFAULT_ROW_COUNT, DEFAULT_SEED, MAX_ASPECT_RATIO, MAX_OFFSET,
    MAX_WEIGHT, default_colour_model,
};
use crate::io::error::{Result, invalid_parameter};
use crate::model::colour::{ColourSpec, parse_hex_colour};
use crate::model::region::Region;
use clap::ValueEnum;
use std::collections::HashSet;

/// Direction in which tile courses run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Orientation {
    /// Rows of tiles, offset stepping shifts rows sideways
    #[default]
    Horizontal,
    /// Columns of tiles, offset stepping shifts columns up or down
    Vertical,
}

/// Direction of the offset step
///
/// For vertical orientation `Right` steps downward and `Left` upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum StepDirection {
    /// Step towards the origin
    Left,
    /// Step away from the origin
    #[default]
    Right,
}

/// Complete input record for pattern generation and layout
///
/// Never mutated in place; [`Parameters::apply`] returns
/// a fresh record for every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Seed string for the random stream
    pub seed: String,
    /// Course direction
    pub orientation: Orientation,
    /// Number of tile rows
    pub row_count: usize,
    /// Number of tile columns
    pub column_count: usize,
    /// Upper bound for weighted duplicates added to each row's group
    pub complexity: usize,
    /// Tile aspect ratio; positive widens, negative heightens (0 and -1 invalid)
    pub aspect_ratio: i32,
    /// Number of steps in a full offset cycle (1 disables stepping)
    pub offset: usize,
    /// Direction of offset steps
    pub step_direction: StepDirection,
    /// Alternate between two positions instead of a staircase
    pub step_alternate: bool,
    /// Number of colours in each row's group
    pub group_size: usize,
    /// Right rotation applied to every row
    pub rotation: usize,
    /// Regions excluded from tiling
    pub holes: Vec<Region>,
    /// Grout colour hexcode
    pub grout: String,
    /// All known colours, enabled or not
    pub colour_model: Vec<ColourSpec>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            orientation: Orientation::Horizontal,
            row_count: DEFAULT_ROW_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
            complexity: DEFAULT_COMPLEXITY,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            offset: DEFAULT_OFFSET,
            step_direction: StepDirection::Right,
            step_alternate: false,
            group_size: DEFAULT_GROUP_SIZE,
            rotation: 0,
            holes: Vec::new(),
            grout: DEFAULT_GROUT.to_string(),
            colour_model: default_colour_model(),
        }
    }
}

impl Parameters {
    /// Colours taking part in generation, in model order
    pub fn enabled_colours(&self) -> impl Iterator<Item = &ColourSpec> {
        self.colour_model.iter().filter(|colour| colour.enabled)
    }

    /// Look up a colour by name
    pub fn colour(&self, name: &str) -> Option<&ColourSpec> {
        self.colour_model.iter().find(|colour| colour.name == name)
    }

    /// Check every field-level constraint
    ///
    /// The generator and layout trust their input; callers run this first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.row_count == 0 {
            return Err(invalid_parameter(
                "row_count",
                &self.row_count,
                &"must be positive",
            ));
        }
        if self.column_count == 0 {
            return Err(invalid_parameter(
                "column_count",
                &self.column_count,
                &"must be positive",
            ));
        }
        if self.aspect_ratio == 0
            || self.aspect_ratio == -1
            || self.aspect_ratio.abs() > MAX_ASPECT_RATIO
        {
            return Err(invalid_parameter(
                "aspect_ratio",
                &self.aspect_ratio,
                &format!("must be in -{MAX_ASPECT_RATIO}..={MAX_ASPECT_RATIO}, excluding 0 and -1"),
            ));
        }
        if !(1..=MAX_OFFSET).contains(&self.offset) {
            return Err(invalid_parameter(
                "offset",
                &self.offset,
                &format!("must be between 1 and {MAX_OFFSET}"),
            ));
        }
        if self.rotation >= self.column_count {
            return Err(invalid_parameter(
                "rotation",
                &self.rotation,
                &format!("must be less than the column count {}", self.column_count),
            ));
        }

        let mut names = HashSet::new();
        for colour in &self.colour_model {
            if !names.insert(colour.name.as_str()) {
                return Err(invalid_parameter(
                    "colour_model",
                    &colour.name,
                    &"colour names must be unique",
                ));
            }
            if !(1..=MAX_WEIGHT).contains(&colour.weight) {
                return Err(invalid_parameter(
                    "weight",
                    &colour.weight,
                    &format!("weight of '{}' must be between 1 and {MAX_WEIGHT}", colour.name),
                ));
            }
            parse_hex_colour(&colour.hexcode)?;
        }
        parse_hex_colour(&self.grout)?;

        let enabled = self.enabled_colours().count();
        if self.group_size == 0 || self.group_size > enabled {
            return Err(invalid_parameter(
                "group_size",
                &self.group_size,
                &format!("must be between 1 and the {enabled} enabled colours"),
            ));
        }

        Ok(())
    }
}
