//! # Box Palette
//!
//! Face and numeral colors for each box value. The classic table carries
//! one entry per value up to the merge maximum of 20; hosts can replace it
//! wholesale from the config file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from palette color parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The input was not `#rrggbb` or a recognized color name.
    #[error("malformed color {0:?}: expected \"#rrggbb\"")]
    Malformed(String),
}

/// Opaque sRGB color.
///
/// Serialized as the `"#rrggbb"` hex form the config file uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    /// Creates a color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `"#rrggbb"` notation.
    ///
    /// Also accepts the named `"white"`, which the classic art table mixes
    /// in among its hex entries.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Malformed`] for anything else.
    pub fn parse(input: &str) -> Result<Self, PaletteError> {
        if input.eq_ignore_ascii_case("white") {
            return Ok(Self::WHITE);
        }

        let malformed = || PaletteError::Malformed(input.to_string());
        let hex = input.strip_prefix('#').ok_or_else(malformed)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| malformed())?;
        Ok(Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }

    /// Formats as `"#rrggbb"`.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

/// Face and numeral colors for one box value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Face color of the box.
    pub body: Color,
    /// Color of the numeral drawn on it.
    pub text: Color,
}

impl BoxStyle {
    /// Creates a style from body and text colors.
    #[must_use]
    pub const fn new(body: Color, text: Color) -> Self {
        Self { body, text }
    }
}

/// The classic art table: one style per box value, 1 through 20.
const CLASSIC_STYLES: [BoxStyle; 20] = [
    BoxStyle::new(Color::rgb(0xff, 0xff, 0x9c), Color::rgb(0x8b, 0x8e, 0x00)), // 1
    BoxStyle::new(Color::rgb(0xff, 0x24, 0x21), Color::WHITE),                 // 2
    BoxStyle::new(Color::rgb(0x00, 0xf3, 0xad), Color::WHITE),                 // 3
    BoxStyle::new(Color::rgb(0x29, 0x8a, 0xff), Color::WHITE),                 // 4
    BoxStyle::new(Color::rgb(0xde, 0xa6, 0xff), Color::WHITE),                 // 5
    BoxStyle::new(Color::rgb(0x31, 0xeb, 0x00), Color::WHITE),                 // 6
    BoxStyle::new(Color::rgb(0xff, 0xd2, 0xbd), Color::rgb(0xff, 0x55, 0x00)), // 7
    BoxStyle::new(Color::rgb(0x9c, 0x00, 0xf7), Color::WHITE),                 // 8
    BoxStyle::new(Color::rgb(0xff, 0xb6, 0x00), Color::WHITE),                 // 9
    BoxStyle::new(Color::rgb(0xc5, 0xc2, 0xc5), Color::WHITE),                 // 10
    BoxStyle::new(Color::rgb(0xce, 0xfb, 0x00), Color::rgb(0x6b, 0x7d, 0x00)), // 11
    BoxStyle::new(Color::rgb(0xff, 0xff, 0x00), Color::rgb(0x7b, 0x79, 0x00)), // 12
    BoxStyle::new(Color::rgb(0xff, 0x18, 0x7b), Color::WHITE),                 // 13
    BoxStyle::new(Color::rgb(0x00, 0xd7, 0xef), Color::WHITE),                 // 14
    BoxStyle::new(Color::rgb(0x80, 0x80, 0x80), Color::WHITE),                 // 15
    BoxStyle::new(Color::rgb(0x24, 0x24, 0xff), Color::WHITE),                 // 16
    BoxStyle::new(Color::rgb(0xf3, 0x40, 0xff), Color::WHITE),                 // 17
    BoxStyle::new(Color::rgb(0xff, 0xb2, 0xb2), Color::WHITE),                 // 18
    BoxStyle::new(Color::rgb(0xff, 0xe5, 0xa5), Color::rgb(0xd0, 0x94, 0x00)), // 19
    BoxStyle::new(Color::rgb(0xfe, 0x82, 0x42), Color::WHITE),                 // 20
];

/// One [`BoxStyle`] per box value, indexed from value 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxPalette {
    /// Styles for values `1..=len`.
    styles: Vec<BoxStyle>,
}

impl BoxPalette {
    /// The classic 20-value palette.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            styles: CLASSIC_STYLES.to_vec(),
        }
    }

    /// Builds a palette from one style per box value, starting at value 1.
    #[must_use]
    pub fn from_styles(styles: Vec<BoxStyle>) -> Self {
        Self { styles }
    }

    /// Number of box values this palette covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Returns true if the palette covers no values at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Style for a box value, or None when the value is 0 or past the table.
    #[must_use]
    pub fn style_for(&self, value: u8) -> Option<&BoxStyle> {
        let index = usize::from(value).checked_sub(1)?;
        self.styles.get(index)
    }
}

impl Default for BoxPalette {
    fn default() -> Self {
        Self::classic()
    }
}
