//! Hex color parsing for config values such as `#0f4f30`

use crate::{Error, Result};

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb` or the short `#rgb` form.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc == #aabbcc
                let r = channel(&digits[0..1])? * 17;
                let g = channel(&digits[1..2])? * 17;
                let b = channel(&digits[2..3])? * 17;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(Color::from_hex("#0f4f30").unwrap(), Color::rgb(0x0f, 0x4f, 0x30));
        assert_eq!(Color::from_hex("FFFFFF").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(Color::from_hex("#1a2").unwrap(), Color::rgb(0x11, 0xaa, 0x22));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["", "#", "#12345", "#1234567", "#gg0000", "white", "#+12345"] {
            assert!(
                matches!(Color::from_hex(bad), Err(Error::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_output_is_lowercase() {
        let c: Color = "#0F4F30".parse().unwrap();
        assert_eq!(c.to_string(), "#0f4f30");
    }
}
