//! sRGB colour values.
use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB colour, written into DrawingML as `<a:srgbClr val="RRGGBB"/>`.
///
/// In configuration files colours are written as hex strings
/// (`"646464"` or `"#646464"`).
///
/// # Examples
///
/// ```rust
/// use deckhand::RgbColor;
///
/// let grey = RgbColor(100, 100, 100);
/// assert_eq!(grey.to_hex(), "646464");
/// assert_eq!(RgbColor::from_hex("#FFFFDC"), Some(RgbColor(255, 255, 220)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub const WHITE: Self = Self(255, 255, 255);
    pub const BLACK: Self = Self(0, 0, 0);

    /// Create an RGB colour from a hex string (`"FF0000"` or `"#FF0000"`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self(r, g, b))
    }

    /// Convert to an upper-case hex string without `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self(r, g, b)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("'{}' is not an RRGGBB colour", value))
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(RgbColor(255, 107, 107).to_hex(), "FF6B6B");
        assert_eq!(RgbColor::from_hex("ff6b6b"), Some(RgbColor(255, 107, 107)));
        assert_eq!(RgbColor(66, 165, 245).to_string(), "42A5F5");
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(RgbColor::from_hex("12345"), None);
        assert_eq!(RgbColor::from_hex("GG0000"), None);
        assert_eq!(RgbColor::from_hex("ééé"), None);
        assert!(RgbColor::try_from("nope".to_string()).is_err());
    }
}
