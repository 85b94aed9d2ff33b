//! Replay a decoded program onto a canvas.
//!
//! Rendering happens in two strictly ordered phases:
//!
//! 1. **Strokes**: the canvas is cleared to the background color and every
//!    instruction is replayed in stream order.
//! 2. **Fills**: with all stroke pixels committed, each fill request runs in
//!    document order against the background color. A fill seeded inside a
//!    region that an earlier fill already painted finds no match and does
//!    nothing.

use log::{debug, info};

use crate::canvas::{Canvas, RasterCanvas};
use crate::color::Color;
use crate::decode::{decode_with, DecodeOptions, Instruction, Program};
use crate::error::RenderError;
use crate::fill::{flood_fill, DEFAULT_TOLERANCE};
use crate::palette::Palette;
use crate::raster::{checked_len, PixelBuffer};

/// Reference output width.
pub const DEFAULT_WIDTH: u32 = 320;

/// Reference output height.
pub const DEFAULT_HEIGHT: u32 = 200;

/// Everything needed to turn a byte stream into pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Palette index painted before drawing and replaced by fills.
    pub background: u8,
    /// Per-channel fill match tolerance.
    pub tolerance: u8,
    pub decode: DecodeOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: 0,
            tolerance: DEFAULT_TOLERANCE,
            decode: DecodeOptions::default(),
        }
    }
}

/// Summary of a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub segments: usize,
    pub fills: usize,
    pub filled_pixels: usize,
}

/// Render a decoded program onto `canvas`.
///
/// # Errors
///
/// Returns `RenderError::InvalidBackground` if the background index is not in
/// the palette, and `RenderError::InvalidColorIndex` if `program` was decoded
/// against a larger palette than `palette`.
pub fn render<C: Canvas>(
    program: &Program,
    palette: &Palette,
    canvas: &mut C,
    options: &RenderOptions,
) -> Result<RenderStats, RenderError> {
    let background = palette
        .get(options.background)
        .ok_or(RenderError::InvalidBackground {
            index: options.background,
            palette_len: palette.len(),
        })?;
    let lookup = |index: u8| {
        palette.get(index).ok_or(RenderError::InvalidColorIndex {
            index,
            palette_len: palette.len(),
        })
    };

    let mut stats = RenderStats::default();

    canvas.clear(background);
    let mut stroke = background;
    for instruction in &program.instructions {
        match *instruction {
            Instruction::SetStrokeColor { color, .. } => {
                stroke = lookup(color)?;
            }
            Instruction::DrawSegment { from, to } => {
                canvas.draw_line(from, to, stroke);
                stats.segments += 1;
            }
        }
    }

    let pixels = canvas.pixels_mut();
    for request in &program.fills {
        let fill = lookup(request.color)?;
        stats.filled_pixels += flood_fill(
            pixels,
            request.seed(),
            background,
            fill,
            options.tolerance,
        );
        stats.fills += 1;
    }

    debug!(
        "rendered {} segments and {} fills ({} pixels filled)",
        stats.segments, stats.fills, stats.filled_pixels
    );
    Ok(stats)
}

/// Decode `bytes` and render them onto a fresh raster canvas.
///
/// A decode error aborts before anything is drawn; no partial image is
/// produced. Dimensions whose buffer would exceed
/// [`MAX_BUFFER_BYTES`](crate::raster::MAX_BUFFER_BYTES) are rejected with
/// `RenderError::CanvasTooLarge`.
pub fn render_image(
    bytes: &[u8],
    palette: &Palette,
    options: &RenderOptions,
) -> Result<PixelBuffer, RenderError> {
    if checked_len(options.width, options.height).is_none() {
        return Err(RenderError::CanvasTooLarge {
            width: options.width,
            height: options.height,
        });
    }
    let program = decode_with(bytes, palette, &options.decode)?;

    // `render` clears to the background first.
    let mut canvas = RasterCanvas::new(options.width, options.height, Color::TRANSPARENT);
    let stats = render(&program, palette, &mut canvas, options)?;
    info!(
        "rendered {}x{} image: {} segments, {} fills",
        options.width, options.height, stats.segments, stats.fills
    );
    Ok(canvas.into_pixels())
}
