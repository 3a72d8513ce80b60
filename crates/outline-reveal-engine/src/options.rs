//! Reveal policy options and the colour type used for distance fading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("colour must start with '#': {0:?}")]
    MissingHash(String),

    #[error("colour must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),

    #[error("invalid hex digit in colour: {0:?}")]
    BadDigit(String),
}

/// An RGB colour, written as `#rrggbb` (or the short `#rgb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorError::BadDigit(s.to_string()))
        };

        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #abc is shorthand for #aabbcc
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorError::BadLength(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Knobs controlling which items pause and how revealed text decays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Only list items at the shallowest indentation seen so far pause.
    pub accept_first_level_only: bool,
    /// How many reveals an item stays unfolded before it is folded again.
    pub fold_age: usize,
    /// Slides whose first subtree is longer than this many characters fade
    /// and fold as they reveal.
    pub large_text_threshold: usize,
    /// Fade colours for segments one and two reveals behind the cursor.
    pub distance_colors: [Color; 2],
    /// Fade colour for segments three or more reveals behind.
    pub disabled_color: Color,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            accept_first_level_only: true,
            fold_age: 2,
            large_text_threshold: 400,
            distance_colors: [Color::rgb(0xa0, 0xa0, 0xa0), Color::rgb(0x70, 0x70, 0x70)],
            disabled_color: Color::rgb(0x4a, 0x4a, 0x4a),
        }
    }
}

impl RevealOptions {
    /// Fade colour for a segment `distance` reveals behind the cursor.
    pub fn fade_color(&self, distance: usize) -> Color {
        match distance {
            0 | 1 => self.distance_colors[0],
            2 => self.distance_colors[1],
            _ => self.disabled_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("#a0a0a0", Color::rgb(0xa0, 0xa0, 0xa0))]
    #[case("#FF8000", Color::rgb(0xff, 0x80, 0x00))]
    #[case("#fff", Color::rgb(0xff, 0xff, 0xff))]
    #[case("  #123456 ", Color::rgb(0x12, 0x34, 0x56))]
    fn parses_colors(#[case] text: &str, #[case] expected: Color) {
        assert_eq!(text.parse::<Color>(), Ok(expected));
    }

    #[rstest]
    #[case("a0a0a0")]
    #[case("#a0a0")]
    #[case("#gggggg")]
    #[case("#ééé")]
    fn rejects_bad_colors(#[case] text: &str) {
        assert!(text.parse::<Color>().is_err());
    }

    #[test]
    fn color_displays_as_hex() {
        assert_eq!(Color::rgb(1, 0xab, 255).to_string(), "#01abff");
    }

    #[test]
    fn fade_color_by_distance() {
        let options = RevealOptions::default();
        assert_eq!(options.fade_color(1), options.distance_colors[0]);
        assert_eq!(options.fade_color(2), options.distance_colors[1]);
        assert_eq!(options.fade_color(3), options.disabled_color);
        assert_eq!(options.fade_color(40), options.disabled_color);
    }
}
