//! # kickpaint - Palette-indexed polyline drawings
//!
//! This crate decodes a compact, hand-authored byte format of polylines and
//! flood fills and replays it into an RGBA raster.
//!
//! ## Overview
//!
//! - **Decoding**: [`decode`] turns bytes into stroke [`Instruction`]s and
//!   deferred [`FillRequest`]s
//! - **Rendering**: implement [`Canvas`] for your target, or use
//!   [`RasterCanvas`]; [`render`] replays strokes, then runs fills
//! - **Filling**: [`flood_fill`] is a tolerant 4-connected fill over a
//!   [`PixelBuffer`]
//!
//! ## Program Format
//!
//! A program is a sequence of two-byte tokens:
//!
//! | Tokens          | Meaning                                      |
//! |-----------------|----------------------------------------------|
//! | `FF FF`         | end of program                               |
//! | `FF cc` `xx yy` | start a polyline in color `cc` at `(xx, yy)` |
//! | `FE cc` `xx yy` | flood fill with color `cc` from `(xx, yy)`   |
//! | `xx yy`         | line from the pen to `(xx, yy)`              |
//!
//! Coordinates are byte offsets from a fixed origin, (70.5, 40.5) by default.
//!
//! ## Example
//!
//! ```
//! use kickpaint::{render_image, Palette, RenderOptions};
//!
//! let bytes = [0xFF, 0x01, 0x00, 0x00, 0x10, 0x10, 0xFF, 0xFF];
//! let image = render_image(&bytes, &Palette::kickstart(), &RenderOptions::default()).unwrap();
//! assert_eq!(image.width(), 320);
//! ```

pub mod canvas;
pub mod color;
pub mod commands;
pub mod config;
pub mod decode;
pub mod error;
pub mod fill;
pub mod hex;
pub mod kickstart;
pub mod palette;
pub mod ppm;
pub mod raster;
pub mod render;
pub mod types;

pub use canvas::{line_pixels, Canvas, LinePixels, RasterCanvas};
pub use color::Color;
pub use config::Config;
pub use decode::{
    decode, decode_with, DecodeOptions, FillRequest, Instruction, Program, DEFAULT_ORIGIN,
};
pub use error::{ColorError, ConfigError, DecodeError, HexError, PaletteError, RenderError};
pub use fill::{flood_fill, DEFAULT_TOLERANCE};
pub use hex::{decode_hex, encode_hex};
pub use kickstart::{kickstart_bytes, kickstart_palette, KICKSTART_HEX};
pub use palette::Palette;
pub use ppm::{encode_ppm, write_ppm};
pub use raster::PixelBuffer;
pub use render::{render, render_image, RenderOptions, RenderStats};
pub use types::{PixelCoord, Point};
