//! Enabled-colour view of the colour model used during generation

use crate::model::colour::ColourSpec;
use std::collections::HashMap;

/// Favourite and remaining enabled colours with their weights
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    /// Enabled favourites, in model order
    pub favourites: Vec<String>,
    /// Enabled non-favourites, in model order
    pub others: Vec<String>,
    /// Weight of every enabled colour
    pub weights: HashMap<String, u32>,
}

impl Palette {
    /// Build the palette from a colour model, skipping disabled colours
    pub fn from_colour_model(colour_model: &[ColourSpec]) -> Self {
        let mut palette = Self::default();
        for colour in colour_model.iter().filter(|colour| colour.enabled) {
            if colour.favourite {
                palette.favourites.push(colour.name.clone());
            } else {
                palette.others.push(colour.name.clone());
            }
            palette.weights.insert(colour.name.clone(), colour.weight);
        }
        palette
    }

    /// Number of enabled colours
    pub fn len(&self) -> usize {
        self.favourites.len() + self.others.len()
    }

    /// Check whether no colour is enabled
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
