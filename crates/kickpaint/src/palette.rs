//! Indexed color palettes.

use crate::color::Color;
use crate::error::PaletteError;

/// An ordered, non-empty list of colors referenced by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from colors.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Parse a palette from `#RRGGBBAA` strings.
    pub fn from_hex_strings<S: AsRef<str>>(entries: &[S]) -> Result<Self, PaletteError> {
        let colors = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Color::from_hex(entry.as_ref())
                    .map_err(|source| PaletteError::Color { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// The four-color palette of the original floppy drawing.
    ///
    /// Index 0 is the light gray background.
    pub fn kickstart() -> Self {
        Self {
            colors: vec![
                Color::rgb(0xF0, 0xF0, 0xF0),
                Color::rgb(0x00, 0x00, 0x00),
                Color::rgb(0x70, 0x70, 0xC0),
                Color::rgb(0xB0, 0xB0, 0xB0),
            ],
        }
    }

    /// Look up a color by index.
    pub fn get(&self, index: u8) -> Option<Color> {
        self.colors.get(index as usize).copied()
    }

    /// Returns true if `index` names a palette entry.
    pub fn contains(&self, index: u8) -> bool {
        (index as usize) < self.colors.len()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes are never empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::kickstart()
    }
}
