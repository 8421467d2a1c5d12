//! Colour specifications and hexcode parsing

use crate::io::error::{MosaicError, Result};

/// A named tile colour in the colour model
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColourSpec {
    /// Unique name, used as the colour key on generated tiles
    pub name: String,
    /// `#rrggbb` or `#rgb` display colour
    pub hexcode: String,
    /// Single-character code for text output
    pub code: char,
    /// Only enabled colours take part in generation
    pub enabled: bool,
    /// Bias towards recurring in a row, 1 to 9
    pub weight: u32,
    /// Favourites are placed in every row's group first
    pub favourite: bool,
}

impl ColourSpec {
    /// Create a colour specification
    pub fn new(
        name: &str,
        hexcode: &str,
        code: char,
        enabled: bool,
        weight: u32,
        favourite: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            hexcode: hexcode.to_string(),
            code,
            enabled,
            weight,
            favourite,
        }
    }

    /// Parse the hexcode into RGB components
    ///
    /// # Errors
    ///
    /// Returns `InvalidColour` if the hexcode is not `#rgb` or `#rrggbb`
    pub fn rgb(&self) -> Result<[u8; 3]> {
        parse_hex_colour(&self.hexcode)
    }
}

/// Parse a `#rgb` or `#rrggbb` string into RGB components
///
/// # Errors
///
/// Returns `InvalidColour` for any other shape or non-hex digits
pub fn parse_hex_colour(hexcode: &str) -> Result<[u8; 3]> {
    let invalid = || MosaicError::InvalidColour {
        hexcode: hexcode.to_string(),
    };

    let digits = hexcode.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |text: &str| u8::from_str_radix(text, 16).map_err(|_parse_error| invalid());

    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(digits.chars()) {
                // Short form repeats each digit: #abc == #aabbcc
                let value = channel(&c.to_string())?;
                *slot = value * 17;
            }
            Ok(rgb)
        }
        6 => {
            let red = digits.get(0..2).ok_or_else(invalid)?;
            let green = digits.get(2..4).ok_or_else(invalid)?;
            let blue = digits.get(4..6).ok_or_else(invalid)?;
            Ok([channel(red)?, channel(green)?, channel(blue)?])
        }
        _ => Err(invalid()),
    }
}
