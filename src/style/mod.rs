pub mod palette;

pub use palette::{distinct_colors, DISTINCT_COLORS};

use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA color.
///
/// Displays as an uppercase hex string (`#RRGGBB`, with an `AA` suffix only
/// when the alpha channel is not opaque), the form tile widgets and CSS
/// understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || MapError::InvalidColor(hex.to_string());

        let channel = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(digits.get(range).ok_or_else(|| invalid())?, 16)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let nibble = |i| -> Result<u8> {
                    let v = channel(i..i + 1)?;
                    Ok(v << 4 | v)
                };
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#FF34FF", "#012C58", "#8FB0FF"] {
            let color = Color::from_hex(hex).unwrap();
            assert_eq!(color.to_string(), hex);
        }
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#F00").unwrap(), Color::RED);
        assert_eq!(
            Color::from_hex("#11223344").unwrap(),
            Color::new(0x11, 0x22, 0x33, 0x44)
        );
    }

    #[test]
    fn test_translucent_display() {
        assert_eq!(Color::new(255, 0, 0, 128).to_string(), "#FF000080");
    }

    #[test]
    fn test_invalid_hex_rejected() {
        for bad in ["", "#12345", "red", "#GGGGGG", "#12345678AB"] {
            let err = Color::from_hex(bad).unwrap_err();
            assert!(matches!(err, MapError::InvalidColor(_)), "{bad}: {err}");
        }
    }
}
