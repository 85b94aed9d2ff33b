//! RGBA pixel buffer.

use crate::color::Color;
use crate::types::PixelCoord;

/// Bytes per pixel.
pub const CHANNELS: usize = 4;

/// Largest buffer, in bytes, that [`checked_len`] accepts (256 MiB).
pub const MAX_BUFFER_BYTES: usize = 256 << 20;

/// Byte length of a `width` x `height` buffer, or `None` if it would exceed
/// [`MAX_BUFFER_BYTES`].
pub fn checked_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
        .filter(|&len| len <= MAX_BUFFER_BYTES)
}

/// A row-major grid of RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to `color`.
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        let data = color
            .to_array()
            .repeat(width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw RGBA bytes. Returns `None` if the length does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * CHANNELS {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if `(x, y)` lies inside the buffer.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Linear pixel index of `(x, y)`, if in bounds.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.index_of(x, y)? * CHANNELS;
        let px = &self.data[i..i + CHANNELS];
        Some(Color::new(px[0], px[1], px[2], px[3]))
    }

    pub fn get_at(&self, at: PixelCoord) -> Option<Color> {
        self.get(at.x, at.y)
    }

    /// Set a pixel. Out-of-bounds writes are dropped and return false.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                let i = i * CHANNELS;
                self.data[i..i + CHANNELS].copy_from_slice(&color.to_array());
                true
            }
            None => false,
        }
    }

    pub fn set_at(&mut self, at: PixelCoord, color: Color) -> bool {
        self.set(at.x, at.y, color)
    }

    /// Set every pixel to `color`.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_array();
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        let rgba = color.to_array();
        self.data
            .chunks_exact(CHANNELS)
            .filter(|px| *px == rgba)
            .count()
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| Color::new(px[0], px[1], px[2], px[3]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Number of pixels.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
