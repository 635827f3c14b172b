//! Color tokens and ordered palettes.
//!
//! ## Purpose
//!
//! This module provides the display color token handed to rendering surfaces
//! and the `ColorScale` that assigns one token per class plus a distinguished
//! token for missing data.
//!
//! ## Design notes
//!
//! * **Hex tokens**: Colors parse from and print as `#rrggbb`.
//! * **Serde**: Colors serialize as their hex string.
//! * **Immutable**: A `ColorScale` is fixed once built.
//!
//! ## Invariants
//!
//! * A `ColorScale` always holds at least one class color.
//! * Class colors are ordered lightest (lowest band) to darkest (highest band).

// External dependencies
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Internal dependencies
use crate::primitives::errors::ChoroplethError;

// ============================================================================
// Color
// ============================================================================

/// An opaque RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rgb` or `#rrggbb` token. The leading `#` is optional.
    pub fn from_hex(token: &str) -> Result<Self, ChoroplethError> {
        let invalid = || ChoroplethError::InvalidColor(token.to_string());
        let digits = token.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(digits[i..=i].repeat(2).as_str());
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ChoroplethError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ChoroplethError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

// ============================================================================
// Color Scale
// ============================================================================

/// Class colors of the default sequential blue ramp, lightest first.
pub const BLUES: [Color; 5] = [
    Color::rgb(0xef, 0xf3, 0xff),
    Color::rgb(0xbd, 0xd7, 0xe7),
    Color::rgb(0x6b, 0xae, 0xd6),
    Color::rgb(0x31, 0x82, 0xbd),
    Color::rgb(0x08, 0x51, 0x9c),
];

/// Default color for regions without a valid observation.
pub const NO_DATA: Color = Color::rgb(0xd3, 0xd3, 0xd3);

/// An ordered palette: one color per class plus a missing-data color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorScale {
    classes: Vec<Color>,
    missing: Color,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::blues()
    }
}

impl ColorScale {
    /// Build a scale from class colors (lightest first) and a missing color.
    pub fn new(classes: Vec<Color>, missing: Color) -> Result<Self, ChoroplethError> {
        if classes.is_empty() {
            return Err(ChoroplethError::EmptyPalette);
        }
        Ok(Self { classes, missing })
    }

    /// Build a scale from hex tokens.
    pub fn from_hex<S: AsRef<str>>(classes: &[S], missing: &str) -> Result<Self, ChoroplethError> {
        let classes = classes
            .iter()
            .map(|token| Color::from_hex(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(classes, Color::from_hex(missing)?)
    }

    /// The five-class sequential blue ramp with a light gray missing color.
    pub fn blues() -> Self {
        Self {
            classes: BLUES.to_vec(),
            missing: NO_DATA,
        }
    }

    /// Number of class colors.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false; a scale holds at least one class color.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class colors, lightest first.
    pub fn classes(&self) -> &[Color] {
        &self.classes
    }

    /// Color for band `index`, clamped to the darkest class.
    pub fn class_color(&self, index: usize) -> Color {
        let last = self.classes.len().saturating_sub(1);
        self.classes
            .get(index.min(last))
            .copied()
            .unwrap_or(self.missing)
    }

    /// Color for regions without a valid observation.
    pub fn missing(&self) -> Color {
        self.missing
    }
}
