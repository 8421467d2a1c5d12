//! Command-line interface for generating a pattern and exporting it

use crate::io::configuration::{
    DEFAULT_ASPECT_RATIO, DEFAULT_BASIS_FACTOR, DEFAULT_COLUMN_COUNT, DEFAULT_COMPLEXITY,
    DEFAULT_GROUP_SIZE, DEFAULT_GROUT, DEFAULT_MAGNIFICATION, DEFAULT_OFFSET, DEFAULT_ROW_COUNT,
    DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_pattern_as_png;
use crate::io::text::{colour_tally, format_pattern};
use crate::model::action::Action;
use crate::model::colour::ColourSpec;
use crate::model::parameters::{Orientation, Parameters, StepDirection};
use crate::model::region::Region;
use crate::pattern::generator::generate;
use crate::pattern::row::TileRow;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mosaic")]
#[command(author, version, about = "Generate seeded mosaic tile patterns")]
/// Command-line arguments for the pattern generation tool
// Boolean flags mirror the parameter record and output switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Seed string for reproducible generation
    #[arg(short, long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Direction in which tile courses run
    #[arg(long, value_enum, default_value_t = Orientation::Horizontal)]
    pub orientation: Orientation,

    /// Number of tile rows
    #[arg(short, long, default_value_t = DEFAULT_ROW_COUNT)]
    pub rows: usize,

    /// Number of tile columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMN_COUNT)]
    pub columns: usize,

    /// Upper bound for weight-biased duplicate colours per row
    #[arg(short = 'x', long, default_value_t = DEFAULT_COMPLEXITY)]
    pub complexity: usize,

    /// Tile aspect ratio: positive for wide tiles, negative for tall tiles
    #[arg(short, long, default_value_t = DEFAULT_ASPECT_RATIO, allow_negative_numbers = true)]
    pub aspect_ratio: i32,

    /// Steps in a full offset cycle (1 disables stepping)
    #[arg(long, default_value_t = DEFAULT_OFFSET)]
    pub offset: usize,

    /// Direction of offset steps
    #[arg(long, value_enum, default_value_t = StepDirection::Right)]
    pub step_direction: StepDirection,

    /// Alternate between two positions instead of a staircase
    #[arg(long)]
    pub step_alternate: bool,

    /// Number of colours in each row's group
    #[arg(short, long, default_value_t = DEFAULT_GROUP_SIZE)]
    pub group_size: usize,

    /// Right rotation applied to every row
    #[arg(short = 't', long, default_value_t = 0)]
    pub rotation: usize,

    /// Region excluded from tiling (repeatable); row 1 is the bottom row
    #[arg(long = "hole", value_name = "ROW,COL:ROW,COL")]
    pub holes: Vec<Region>,

    /// Grout colour hexcode
    #[arg(long, default_value = DEFAULT_GROUT)]
    pub grout: String,

    /// Enable a colour of the default palette (repeatable)
    #[arg(long = "enable", value_name = "NAME")]
    pub enable: Vec<String>,

    /// Disable a colour of the default palette (repeatable)
    #[arg(long = "disable", value_name = "NAME")]
    pub disable: Vec<String>,

    /// Mark a colour as favourite (repeatable)
    #[arg(long = "favourite", value_name = "NAME")]
    pub favourites: Vec<String>,

    /// Set a colour weight (repeatable)
    #[arg(long = "weight", value_name = "NAME=WEIGHT", value_parser = parse_weight)]
    pub weights: Vec<(String, u32)>,

    /// Magnification percentage for image export
    #[arg(short, long, default_value_t = DEFAULT_MAGNIFICATION)]
    pub magnification: f64,

    /// Short tile side in basis units for image export
    #[arg(short, long, default_value_t = DEFAULT_BASIS_FACTOR)]
    pub basis_factor: f64,

    /// Write a PNG preview to this path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress the text grid
    #[arg(short, long)]
    pub quiet: bool,

    /// Log generation details
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_weight(text: &str) -> std::result::Result<(String, u32), String> {
    let (name, weight) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=WEIGHT, got '{text}'"))?;
    let weight = weight
        .trim()
        .parse()
        .map_err(|e| format!("invalid weight '{weight}': {e}"))?;
    Ok((name.trim().to_string(), weight))
}

impl Cli {
    /// Build the parameter record from the default record and the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a palette edit names an unknown colour
    pub fn parameters(&self) -> Result<Parameters> {
        let actions = [
            Action::SetSeed(self.seed.clone()),
            Action::SetOrientation(self.orientation),
            Action::SetRowCount(self.rows),
            Action::SetColumnCount(self.columns),
            Action::SetComplexity(self.complexity),
            Action::SetAspectRatio(self.aspect_ratio),
            Action::SetOffset(self.offset),
            Action::SetStepDirection(self.step_direction),
            Action::SetStepAlternate(self.step_alternate),
            Action::SetGroupSize(self.group_size),
            Action::SetRotation(self.rotation),
            Action::SetGrout(self.grout.clone()),
        ];

        let mut parameters = actions
            .into_iter()
            .chain(self.holes.iter().copied().map(Action::AddHole))
            .fold(Parameters::default(), |parameters, action| {
                parameters.apply(action)
            });

        for name in &self.enable {
            parameters = edit_colour(&parameters, "enable", name, |c| c.enabled = true)?;
        }
        for name in &self.disable {
            parameters = edit_colour(&parameters, "disable", name, |c| c.enabled = false)?;
        }
        for name in &self.favourites {
            parameters = edit_colour(&parameters, "favourite", name, |c| c.favourite = true)?;
        }
        for (name, weight) in &self.weights {
            parameters = edit_colour(&parameters, "weight", name, |c| c.weight = *weight)?;
        }

        Ok(parameters)
    }
}

fn edit_colour(
    parameters: &Parameters,
    argument: &'static str,
    name: &str,
    edit: impl FnOnce(&mut ColourSpec),
) -> Result<Parameters> {
    let mut colour = parameters
        .colour(name)
        .cloned()
        .ok_or_else(|| invalid_parameter(argument, &name, &"no colour with this name"))?;
    edit(&mut colour);
    Ok(parameters.apply(Action::SetColour(colour)))
}

/// Runs one generation from parsed arguments
pub struct PatternRunner {
    cli: Cli,
}

impl PatternRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate, generate, print and export according to the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, generation or export fails
    pub fn run(&self) -> Result<()> {
        let parameters = self.cli.parameters()?;
        parameters.validate()?;

        for (name, value) in [
            ("magnification", self.cli.magnification),
            ("basis_factor", self.cli.basis_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(name, &value, &"must be positive and finite"));
            }
        }

        let rows = generate(&parameters)?;
        info!(
            seed = %parameters.seed,
            rows = rows.len(),
            columns = parameters.column_count,
            "pattern generated"
        );

        if !self.cli.quiet {
            self.print_pattern(&rows, &parameters);
        }

        if let Some(ref output) = self.cli.output {
            export_pattern_as_png(
                &rows,
                &parameters,
                self.cli.basis_factor,
                self.cli.magnification,
                output,
            )?;
            info!(path = %output.display(), "image written");
        }

        Ok(())
    }

    // Allow print for the pattern itself, which is the tool's output
    #[allow(clippy::print_stdout)]
    fn print_pattern(&self, rows: &[TileRow], parameters: &Parameters) {
        print!("{}", format_pattern(rows, &parameters.colour_model));
        if self.cli.verbose {
            for (name, count) in colour_tally(rows) {
                println!("{name}: {count}");
            }
        }
    }
}
