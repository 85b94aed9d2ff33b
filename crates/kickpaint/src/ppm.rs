//! Binary PPM (`P6`) export.
//!
//! PPM has no alpha channel; alpha is dropped and every pixel is written as
//! three bytes.

use std::io::{self, Write};

use crate::raster::{PixelBuffer, CHANNELS};

/// Write `buffer` as a binary PPM image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;

    let stride = buffer.width().max(1) as usize * CHANNELS;
    let mut row = Vec::with_capacity(stride);
    for line in buffer.as_bytes().chunks_exact(stride) {
        row.clear();
        for px in line.chunks_exact(CHANNELS) {
            row.extend_from_slice(&px[..3]);
        }
        writer.write_all(&row)?;
    }
    writer.flush()
}

/// Encode `buffer` as binary PPM bytes.
pub fn encode_ppm(buffer: &PixelBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(16 + buffer.area() * 3);
    // Writing into a Vec cannot fail.
    let _ = write_ppm(buffer, &mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_header_and_pixels() {
        let mut buffer = PixelBuffer::new(2, 1, Color::new(1, 2, 3, 0));
        buffer.set(1, 0, Color::new(4, 5, 6, 255));
        let bytes = encode_ppm(&buffer);
        assert_eq!(bytes, b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06");
    }

    #[test]
    fn test_size() {
        let buffer = PixelBuffer::new(320, 200, Color::WHITE);
        let bytes = encode_ppm(&buffer);
        assert_eq!(bytes.len(), "P6\n320 200\n255\n".len() + 320 * 200 * 3);
    }
}
