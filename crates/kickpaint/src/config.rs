//! Render configuration (`kickpaint.toml`) parsing.
//!
//! Every field is optional; omitted values fall back to the reference
//! 320x200 canvas, origin (70.5, 40.5), tolerance 20 and the four-color
//! floppy palette.
//!
//! ```toml
//! [canvas]
//! width = 320
//! height = 200
//! background = 0
//! origin = [70.5, 40.5]
//!
//! [fill]
//! tolerance = 20
//!
//! [palette]
//! colors = ["#f0f0f0ff", "#000000ff", "#7070c0ff", "#b0b0b0ff"]
//! ```

use crate::decode::{DecodeOptions, DEFAULT_ORIGIN};
use crate::error::ConfigError;
use crate::fill::DEFAULT_TOLERANCE;
use crate::palette::Palette;
use crate::raster::{checked_len, MAX_BUFFER_BYTES};
use crate::render::{RenderOptions, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A parsed render configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output surface settings.
    pub canvas: CanvasSection,

    /// Flood fill settings.
    pub fill: FillSection,

    /// Color table.
    pub palette: PaletteSection,
}

/// The `[canvas]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasSection {
    pub width: u32,
    pub height: u32,

    /// Palette index of the background color.
    pub background: u8,

    /// Canvas position of raw coordinate (0, 0).
    pub origin: [f32; 2],
}

impl Default for CanvasSection {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: 0,
            origin: [DEFAULT_ORIGIN.x, DEFAULT_ORIGIN.y],
        }
    }
}

/// The `[fill]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FillSection {
    /// Per-channel difference at which colors stop matching.
    pub tolerance: u8,
}

impl Default for FillSection {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// The `[palette]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteSection {
    /// `#RRGGBBAA` strings, in index order.
    pub colors: Vec<String>,
}

impl Default for PaletteSection {
    fn default() -> Self {
        Self {
            colors: Palette::kickstart()
                .colors()
                .iter()
                .map(|c| c.to_hex())
                .collect(),
        }
    }
}

impl Config {
    /// Load a configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_owned(),
            source: e,
        })?;

        Self::from_str(&content, path)
    }

    /// Parse a configuration from a string. `path` is used for error reporting.
    pub fn from_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Build the palette described by `[palette]`.
    pub fn palette(&self) -> Result<Palette, crate::error::PaletteError> {
        Palette::from_hex_strings(&self.palette.colors)
    }

    pub fn render_options(&self) -> RenderOptions {
        let [x, y] = self.canvas.origin;
        RenderOptions {
            width: self.canvas.width,
            height: self.canvas.height,
            background: self.canvas.background,
            tolerance: self.fill.tolerance,
            decode: DecodeOptions {
                origin: Point::new(x, y),
            },
        }
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |field, reason: String| ConfigError::InvalidField {
            path: path.to_owned(),
            field,
            reason,
        };

        if self.canvas.width == 0 {
            return Err(invalid("canvas.width", "must be at least 1".into()));
        }
        if self.canvas.height == 0 {
            return Err(invalid("canvas.height", "must be at least 1".into()));
        }
        if checked_len(self.canvas.width, self.canvas.height).is_none() {
            return Err(invalid(
                "canvas",
                format!(
                    "{}x{} exceeds the {MAX_BUFFER_BYTES}-byte image limit",
                    self.canvas.width, self.canvas.height
                ),
            ));
        }
        if !self.canvas.origin.iter().all(|v| v.is_finite()) {
            return Err(invalid("canvas.origin", "must be finite".into()));
        }

        let palette = self.palette().map_err(|source| ConfigError::Palette {
            path: path.to_owned(),
            source,
        })?;
        if !palette.contains(self.canvas.background) {
            return Err(invalid(
                "canvas.background",
                format!(
                    "index {} is outside the palette ({} colors)",
                    self.canvas.background,
                    palette.len()
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use std::path::PathBuf;

    fn test_path() -> PathBuf {
        PathBuf::from("test/kickpaint.toml")
    }

    #[test]
    fn parse_empty_config_uses_reference_values() {
        let config = Config::from_str("", &test_path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render_options(), RenderOptions::default());
        assert_eq!(config.palette().unwrap(), Palette::kickstart());
    }

    #[test]
    fn parse_full_config() {
        let content = r##"
            [canvas]
            width = 64
            height = 48
            background = 1
            origin = [0.5, 0.5]

            [fill]
            tolerance = 1

            [palette]
            colors = ["#000000ff", "#ffffffff", "#ff0000"]
        "##;

        let config = Config::from_str(content, &test_path()).unwrap();
        let options = config.render_options();
        assert_eq!(options.width, 64);
        assert_eq!(options.height, 48);
        assert_eq!(options.background, 1);
        assert_eq!(options.tolerance, 1);
        assert_eq!(options.decode.origin, Point::new(0.5, 0.5));
        assert_eq!(config.palette().unwrap().len(), 3);
    }

    #[test]
    fn zero_width_fails() {
        let content = r#"
            [canvas]
            width = 0
        "#;

        let result = Config::from_str(content, &test_path());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidField { field: "canvas.width", .. })
        ));
    }

    #[test]
    fn oversized_canvas_fails() {
        let content = r#"
            [canvas]
            width = 4294967295
            height = 4294967295
        "#;

        let result = Config::from_str(content, &test_path());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidField { field: "canvas", .. })
        ));
    }

    #[test]
    fn large_canvas_within_limit_parses() {
        let content = r#"
            [canvas]
            width = 8192
            height = 8192
        "#;

        let config = Config::from_str(content, &test_path()).unwrap();
        assert_eq!(config.render_options().width, 8192);
    }

    #[test]
    fn background_outside_palette_fails() {
        let content = r##"
            [canvas]
            background = 2

            [palette]
            colors = ["#000000ff", "#ffffffff"]
        "##;

        let result = Config::from_str(content, &test_path());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidField { field: "canvas.background", .. })
        ));
    }

    #[test]
    fn empty_palette_fails() {
        let content = r#"
            [palette]
            colors = []
        "#;

        let result = Config::from_str(content, &test_path());
        assert!(matches!(
            result,
            Err(ConfigError::Palette { source: PaletteError::Empty, .. })
        ));
    }

    #[test]
    fn unknown_field_fails() {
        let content = r#"
            [canvas]
            smoothing = true
        "#;

        let result = Config::from_str(content, &test_path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn invalid_toml_fails() {
        let content = "this is not valid toml [[[";

        let result = Config::from_str(content, &test_path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
