//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// pen_color = "black"
///
/// # Hex color
/// pen_color = "#1e3a8a"
///
/// # Custom RGB color (0-255 per component)
/// pen_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, white, black) or `#rrggbb` hex
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings starting with `#` are parsed as hex, other strings are looked up
    /// with `util::name_to_color()`. Unknown values fall back to black with a
    /// warning so ink stays visible on the white board.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Self::parse_name(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Returns true when the value resolves to a known color.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => Self::parse_name(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }

    fn parse_name(name: &str) -> Option<Color> {
        if name.trim_start().starts_with('#') {
            Color::from_hex(name)
        } else {
            crate::util::name_to_color(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, WHITE};

    #[test]
    fn resolves_names_hex_and_rgb() {
        assert_eq!(ColorSpec::Name("Blue".into()).to_color(), BLUE);
        assert_eq!(ColorSpec::Name("#ffffff".into()).to_color(), WHITE);
        assert_eq!(
            ColorSpec::Rgb([255, 0, 0]).to_color(),
            Color::new(1.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        let spec = ColorSpec::Name("chartreuse-ish".into());
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color(), BLACK);
    }

    #[test]
    fn non_ascii_hex_falls_back_to_black() {
        let spec = ColorSpec::Name("#1é234".into());
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color(), BLACK);
    }
}
