//! Copy-on-write parameter updates, one variant per logical action

use crate::model::colour::ColourSpec;
use crate::model::parameters::{Orientation, Parameters, StepDirection};
use crate::model::region::Region;

/// A single change to a parameter record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the seed
    SetSeed(String),
    /// Replace the course orientation
    SetOrientation(Orientation),
    /// Replace the row count
    SetRowCount(usize),
    /// Replace the column count, wrapping rotation back into range
    SetColumnCount(usize),
    /// Replace the complexity
    SetComplexity(usize),
    /// Replace the aspect ratio
    SetAspectRatio(i32),
    /// Replace the offset
    SetOffset(usize),
    /// Replace the step direction
    SetStepDirection(StepDirection),
    /// Toggle alternating steps
    SetStepAlternate(bool),
    /// Replace the group size
    SetGroupSize(usize),
    /// Replace the rotation
    SetRotation(usize),
    /// Replace the grout colour
    SetGrout(String),
    /// Replace the colour with the same name, or append a new one
    SetColour(ColourSpec),
    /// Append a hole
    AddHole(Region),
    /// Remove the hole at an index; out of range is a no-op
    RemoveHole(usize),
    /// Replace the whole record with a snapshot
    Load(Box<Parameters>),
}

impl Parameters {
    /// Produce the record that results from applying an action
    ///
    /// `self` is left untouched.
    pub fn apply(&self, action: Action) -> Self {
        if let Action::Load(snapshot) = action {
            return *snapshot;
        }

        let mut next = self.clone();
        match action {
            Action::SetSeed(seed) => next.seed = seed,
            Action::SetOrientation(orientation) => next.orientation = orientation,
            Action::SetRowCount(row_count) => next.row_count = row_count,
            Action::SetColumnCount(column_count) => {
                next.column_count = column_count;
                next.rotation = next.rotation.checked_rem(column_count).unwrap_or(0);
            }
            Action::SetComplexity(complexity) => next.complexity = complexity,
            Action::SetAspectRatio(aspect_ratio) => next.aspect_ratio = aspect_ratio,
            Action::SetOffset(offset) => next.offset = offset,
            Action::SetStepDirection(direction) => next.step_direction = direction,
            Action::SetStepAlternate(alternate) => next.step_alternate = alternate,
            Action::SetGroupSize(group_size) => next.group_size = group_size,
            Action::SetRotation(rotation) => next.rotation = rotation,
            Action::SetGrout(grout) => next.grout = grout,
            Action::SetColour(colour) => {
                match next.colour_model.iter_mut().find(|c| c.name == colour.name) {
                    Some(existing) => *existing = colour,
                    None => next.colour_model.push(colour),
                }
            }
            Action::AddHole(region) => next.holes.push(region),
            Action::RemoveHole(index) => {
                if index < next.holes.len() {
                    next.holes.remove(index);
                }
            }
            Action::Load(_) => {}
        }
        next
    }
}
