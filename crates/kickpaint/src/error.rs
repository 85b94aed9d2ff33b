//! Error types for decoding and rendering drawing programs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when decoding a drawing program.
///
/// Offsets are byte positions of the token that caused the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The stream ended inside a four-byte command group.
    #[error("truncated stream: command at offset {offset} is missing its point")]
    TruncatedStream { offset: usize },

    /// A stroke or fill color index is outside the palette.
    #[error("invalid color index {index} at offset {offset} (palette has {palette_len} colors)")]
    InvalidColorIndex {
        index: u8,
        palette_len: usize,
        offset: usize,
    },

    /// A plain point appeared before any polyline was started.
    #[error("segment at offset {offset} has no polyline to continue")]
    SegmentWithoutPolyline { offset: usize },
}

/// Errors that can occur when parsing hex program text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Digits do not pair up into whole bytes.
    #[error("hex text has an odd number of digits ({digits})")]
    OddLength { digits: usize },

    /// A character that is neither a hex digit nor whitespace.
    #[error("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit { ch: char, offset: usize },
}

/// Errors that can occur when parsing a `#RRGGBBAA` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color {text:?} must have 6 or 8 hex digits")]
    InvalidLength { text: String },

    #[error("color {text:?} contains a non-hex digit")]
    InvalidDigit { text: String },
}

/// Errors that can occur when building a palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,

    #[error("palette entry {index}: {source}")]
    Color {
        index: usize,
        #[source]
        source: ColorError,
    },
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid palette in {path}: {source}")]
    Palette {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },

    #[error("invalid value for '{field}' in {path}: {reason}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        reason: String,
    },
}

/// Errors that can occur when rendering a program to pixels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("background index {index} is outside the palette ({palette_len} colors)")]
    InvalidBackground { index: u8, palette_len: usize },

    /// A program instruction names a color the palette does not have.
    #[error("color index {index} is outside the palette ({palette_len} colors)")]
    InvalidColorIndex { index: u8, palette_len: usize },

    #[error("{width}x{height} canvas is too large")]
    CanvasTooLarge { width: u32, height: u32 },
}
