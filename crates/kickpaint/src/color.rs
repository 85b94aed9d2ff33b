//! RGBA color type.

use crate::error::ColorError;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color with explicit RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a 32-bit RGBA value (0xRRGGBBAA format).
    pub const fn from_packed(rgba: u32) -> Self {
        Self {
            r: ((rgba >> 24) & 0xFF) as u8,
            g: ((rgba >> 16) & 0xFF) as u8,
            b: ((rgba >> 8) & 0xFF) as u8,
            a: (rgba & 0xFF) as u8,
        }
    }

    /// Pack into a 32-bit RGBA value (0xRRGGBBAA format).
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 24)
            | ((self.g as u32) << 16)
            | ((self.b as u32) << 8)
            | (self.a as u32)
    }

    /// Channels in buffer order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBBAA` or `#RRGGBB`. The `#` is optional.
    ///
    /// # Example
    /// ```
    /// use kickpaint::Color;
    /// assert_eq!(Color::from_hex("#7070c0ff").unwrap(), Color::rgb(0x70, 0x70, 0xC0));
    /// ```
    pub fn from_hex(text: &str) -> Result<Self, ColorError> {
        let digits = text.trim().trim_start_matches('#');
        let packed = match digits.len() {
            6 => (parse_hex_u32(digits, text)? << 8) | 0xFF,
            8 => parse_hex_u32(digits, text)?,
            _ => {
                return Err(ColorError::InvalidLength {
                    text: text.to_string(),
                })
            }
        };
        Ok(Self::from_packed(packed))
    }

    /// Format as lowercase `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:08x}", self.to_packed())
    }

    /// Returns true if every channel differs from `other` by strictly less than `tolerance`.
    ///
    /// A tolerance of 0 never matches.
    pub fn matches(self, other: Color, tolerance: u8) -> bool {
        self.r.abs_diff(other.r) < tolerance
            && self.g.abs_diff(other.g) < tolerance
            && self.b.abs_diff(other.b) < tolerance
            && self.a.abs_diff(other.a) < tolerance
    }

    // Common colors
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
}

fn parse_hex_u32(digits: &str, text: &str) -> Result<u32, ColorError> {
    // from_str_radix accepts a leading '+', which is not a digit here
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit {
            text: text.to_string(),
        });
    }
    u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidDigit {
        text: text.to_string(),
    })
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.to_packed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_format() {
        let color = Color::new(0xAA, 0xBB, 0xCC, 0xDD);
        assert_eq!(color.to_packed(), 0xAABBCCDD);
        assert_eq!(Color::from_packed(0xAABBCCDD), color);
    }

    #[test]
    fn test_parse_rgba_hex() {
        let color = Color::from_hex("#f0f0f0ff").unwrap();
        assert_eq!(color, Color::new(0xF0, 0xF0, 0xF0, 0xFF));
    }

    #[test]
    fn test_parse_rgb_hex_is_opaque() {
        let color = Color::from_hex("B0B0B0").unwrap();
        assert_eq!(color, Color::new(0xB0, 0xB0, 0xB0, 0xFF));
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(ColorError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_digit() {
        assert!(matches!(
            Color::from_hex("#f0f0g0ff"),
            Err(ColorError::InvalidDigit { .. })
        ));
        assert!(matches!(
            Color::from_hex("+0f0f0ff"),
            Err(ColorError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(0x70, 0x70, 0xC0).to_hex(), "#7070c0ff");
        assert_eq!(Color::rgb(0x70, 0x70, 0xC0).to_string(), "#7070C0FF");
    }

    #[test]
    fn test_match_is_strict() {
        let base = Color::new(100, 100, 100, 100);
        // Off by exactly the tolerance in one channel: no match.
        assert!(!base.matches(Color::new(120, 100, 100, 100), 20));
        assert!(!base.matches(Color::new(100, 100, 100, 80), 20));
        // Off by tolerance - 1 in every channel: match.
        assert!(base.matches(Color::new(119, 81, 119, 81), 20));
    }

    #[test]
    fn test_zero_tolerance_never_matches() {
        assert!(!Color::BLACK.matches(Color::BLACK, 0));
        assert!(Color::BLACK.matches(Color::BLACK, 1));
    }
}
