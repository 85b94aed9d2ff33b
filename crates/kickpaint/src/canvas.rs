//! Drawing surfaces.
//!
//! This module provides:
//! - [`Canvas`] trait for implementing custom drawing targets
//! - [`RasterCanvas`], an aliased software rasterizer over a [`PixelBuffer`]
//!
//! # Coordinate System
//!
//! Origin at top-left, x increases rightward, y increases downward. Canvas
//! points are floating-point; the pixel `(x, y)` covers `[x, x+1) × [y, y+1)`.

use crate::color::Color;
use crate::raster::PixelBuffer;
use crate::types::{PixelCoord, Point};

/// Trait for surfaces a program can be drawn onto.
///
/// Strokes go through `draw_line`. Flood fills need direct pixel access,
/// which is granted through `pixels_mut` only after every stroke is drawn.
pub trait Canvas {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Draw a one-pixel line from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// The materialized pixels of the surface.
    fn pixels_mut(&mut self) -> &mut PixelBuffer;
}

/// A canvas that rasterizes strokes directly into an owned pixel buffer.
///
/// Lines are aliased: each covered pixel is set to the exact stroke color.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    buffer: PixelBuffer,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            buffer: PixelBuffer::new(width, height, background),
        }
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn into_pixels(self) -> PixelBuffer {
        self.buffer
    }
}

impl From<PixelBuffer> for RasterCanvas {
    fn from(buffer: PixelBuffer) -> Self {
        Self { buffer }
    }
}

impl Canvas for RasterCanvas {
    fn clear(&mut self, color: Color) {
        self.buffer.clear(color);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let (from, to) = (from.to_pixel(), to.to_pixel());
        let (w, h) = (self.buffer.width() as i32, self.buffer.height() as i32);
        // Both ends on the same outside side of the buffer: nothing to plot.
        if (from.x < 0 && to.x < 0)
            || (from.y < 0 && to.y < 0)
            || (from.x >= w && to.x >= w)
            || (from.y >= h && to.y >= h)
        {
            return;
        }
        for p in line_pixels(from, to) {
            self.buffer.set_at(p, color);
        }
    }

    fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }
}

/// Pixels on the Bresenham line between two pixels, both ends included.
///
/// Consecutive pixels are 8-connected, so a closed polyline leaves no
/// 4-connected gap for a flood fill to leak through. Pixels are produced
/// lazily; nothing is allocated however far apart the endpoints are.
pub fn line_pixels(from: PixelCoord, to: PixelCoord) -> LinePixels {
    let (x, y) = (from.x as i64, from.y as i64);
    let (x1, y1) = (to.x as i64, to.y as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    LinePixels {
        x,
        y,
        x1,
        y1,
        dx,
        dy,
        sx: if x < x1 { 1 } else { -1 },
        sy: if y < y1 { 1 } else { -1 },
        err: dx + dy,
        done: false,
    }
}

/// Iterator returned by [`line_pixels`].
#[derive(Debug, Clone)]
pub struct LinePixels {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Iterator for LinePixels {
    type Item = PixelCoord;

    fn next(&mut self) -> Option<PixelCoord> {
        if self.done {
            return None;
        }
        let current = PixelCoord::new(self.x as i32, self.y as i32);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let left = (self.x1 - self.x).abs().max((self.y1 - self.y).abs()) as usize + 1;
        (left, Some(left))
    }
}

impl ExactSizeIterator for LinePixels {}
