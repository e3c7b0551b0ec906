//! Paint colors
//!
//! Colors are style-only parameters: changing one never affects synthesized
//! geometry. They serialize as `#RRGGBB` strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DARKER_FACTOR;
use crate::error::ParameterError;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Darker shade used for borders, scaling every channel by 0.7
    pub fn darker(self) -> Self {
        let scale = |c: u8| (c as f64 * DARKER_FACTOR) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.to_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            "gray" | "grey" => return Ok(Self::GRAY),
            "lightgray" | "lightgrey" => return Ok(Self::LIGHT_GRAY),
            "red" => return Ok(Self::RED),
            _ => {}
        }

        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParameterError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ParameterError::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ParameterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#CD8500".parse::<Color>().unwrap(), Color::rgb(0xCD, 0x85, 0x00));
        assert_eq!("da8a67".parse::<Color>().unwrap(), Color::rgb(0xDA, 0x8A, 0x67));
        assert_eq!("lightGray".parse::<Color>().unwrap(), Color::LIGHT_GRAY);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
        assert!("chartreuse".parse::<Color>().is_err());
    }

    #[test]
    fn test_darker() {
        assert_eq!(Color::WHITE.darker(), Color::rgb(178, 178, 178));
        assert_eq!(Color::rgb(0xCD, 0x85, 0x00).darker(), Color::rgb(143, 93, 0));
        assert_eq!(Color::BLACK.darker(), Color::BLACK);
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Color::rgb(0x00, 0xB2, 0xEE);
        assert_eq!(color.to_hex(), "#00B2EE");
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#00B2EE\"");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), color);
    }
}
