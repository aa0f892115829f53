//! Color values
//!
//! An RGBA color with four 8-bit channels. Alpha is kept on the same 0-255
//! scale as red, green and blue so that all four channels interpolate the
//! same way.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// RGBA color, each channel in `0..=255`
///
/// Colors are plain values: interpolation produces a new color, nothing
/// mutates one in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse any color syntax understood by [`crate::parse::parse_color`]
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        crate::parse::parse_color(input)
    }

    /// Channels in `[red, green, blue, alpha]` order
    pub const fn channels(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub const fn from_channels(channels: [u8; 4]) -> Self {
        Self::rgba(channels[0], channels[1], channels[2], channels[3])
    }

    pub const fn is_opaque(&self) -> bool {
        self.alpha == 255
    }

    /// Normalized display string: `#rrggbb`, with a trailing `aa` byte only
    /// when the color is not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_hex_omits_alpha() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::from_hex(0x1a2b3c).to_hex(), "#1a2b3c");
    }

    #[test]
    fn test_translucent_hex_has_alpha() {
        assert_eq!(Color::rgba(255, 0, 0, 128).to_hex(), "#ff000080");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn test_from_str() {
        let color: Color = "#ffffff".parse().unwrap();
        assert_eq!(color, Color::WHITE);
        assert!("not a color".parse::<Color>().is_err());
    }

    #[test]
    fn test_channels_roundtrip() {
        let color = Color::rgba(1, 2, 3, 4);
        assert_eq!(Color::from_channels(color.channels()), color);
    }
}
