//! Tolerant 4-connected flood fill.
//!
//! The fill walks outward from a seed with an explicit stack, replacing every
//! edge-connected pixel that approximately matches the target color. Matching
//! is per channel with a strict tolerance so blended stroke edges still stop
//! the fill without leaving a ring of unfilled pixels beside them.
//!
//! Neighbors are pushed without checks; bounds and the visited grid are
//! consulted when a pixel is popped. Each pixel is examined at most once, and
//! the stack never holds more than four entries per filled pixel.

use log::debug;

use crate::color::Color;
use crate::raster::PixelBuffer;
use crate::types::PixelCoord;

/// Per-channel difference at which two colors stop matching.
pub const DEFAULT_TOLERANCE: u8 = 20;

/// Work stack of pixels still to examine.
#[derive(Debug, Default)]
struct FillStack {
    pending: Vec<PixelCoord>,
}

impl FillStack {
    fn push(&mut self, at: PixelCoord) {
        self.pending.push(at);
    }

    fn pop(&mut self) -> Option<PixelCoord> {
        self.pending.pop()
    }
}

/// Flood fill the region around `seed` that matches `target`.
///
/// Returns the number of pixels written. A seed outside the buffer or on a
/// pixel that does not match `target` writes nothing.
pub fn flood_fill(
    buffer: &mut PixelBuffer,
    seed: PixelCoord,
    target: Color,
    fill: Color,
    tolerance: u8,
) -> usize {
    let mut visited = vec![false; buffer.area()];
    let mut stack = FillStack::default();
    let mut written = 0;

    stack.push(seed);
    while let Some(at) = stack.pop() {
        let Some(index) = buffer.index_of(at.x, at.y) else {
            continue;
        };
        if visited[index] {
            continue;
        }
        visited[index] = true;

        let matches = buffer
            .get_at(at)
            .is_some_and(|current| current.matches(target, tolerance));
        if !matches {
            continue;
        }

        buffer.set_at(at, fill);
        written += 1;
        for neighbor in at.neighbors() {
            stack.push(neighbor);
        }
    }

    debug!(
        "flood fill at ({}, {}) with {fill}: {written} pixels",
        seed.x, seed.y
    );
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const BG: Color = Color::rgb(0xF0, 0xF0, 0xF0);
    const LINE: Color = Color::BLACK;
    const PAINT: Color = Color::rgb(0x70, 0x70, 0xC0);

    /// 10x10 background with a closed square outline from (2,2) to (7,7).
    fn boxed_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(10, 10, BG);
        for i in 2..=7 {
            buffer.set(i, 2, LINE);
            buffer.set(i, 7, LINE);
            buffer.set(2, i, LINE);
            buffer.set(7, i, LINE);
        }
        buffer
    }

    fn inside_box(x: i32, y: i32) -> bool {
        (3..=6).contains(&x) && (3..=6).contains(&y)
    }

    #[test]
    fn test_fill_stays_inside_boundary() {
        let mut buffer = boxed_buffer();
        let before = buffer.clone();

        let written = flood_fill(&mut buffer, PixelCoord::new(4, 4), BG, PAINT, 20);
        assert_eq!(written, 16);

        for y in 0..10 {
            for x in 0..10 {
                let expected = if inside_box(x, y) {
                    PAINT
                } else {
                    before.get(x, y).unwrap()
                };
                assert_eq!(buffer.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_outside_does_not_enter_box() {
        let mut buffer = boxed_buffer();
        let written = flood_fill(&mut buffer, PixelCoord::new(0, 0), BG, PAINT, 20);
        assert_eq!(written, 100 - 36);
        assert_eq!(buffer.get(4, 4), Some(BG));
        assert_eq!(buffer.count(LINE), 20);
    }

    #[test]
    fn test_fill_does_not_cross_diagonal_gap() {
        // Two regions touching only at a corner stay separate.
        let mut buffer = PixelBuffer::new(2, 2, BG);
        buffer.set(1, 0, LINE);
        buffer.set(0, 1, LINE);
        let written = flood_fill(&mut buffer, PixelCoord::new(0, 0), BG, PAINT, 20);
        assert_eq!(written, 1);
        assert_eq!(buffer.get(1, 1), Some(BG));
    }

    #[test]
    fn test_fill_absorbs_near_matches() {
        let mut buffer = PixelBuffer::new(3, 1, BG);
        buffer.set(1, 0, Color::rgb(0xF0 - 19, 0xF0, 0xF0 - 19));
        buffer.set(2, 0, Color::rgb(0xF0 - 20, 0xF0, 0xF0));
        let written = flood_fill(&mut buffer, PixelCoord::new(0, 0), BG, PAINT, 20);
        assert_eq!(written, 2);
        assert_eq!(buffer.get(2, 0), Some(Color::rgb(0xF0 - 20, 0xF0, 0xF0)));
    }

    #[test]
    fn test_second_fill_is_a_no_op() {
        let mut once = boxed_buffer();
        flood_fill(&mut once, PixelCoord::new(4, 4), BG, PAINT, 20);

        let mut twice = once.clone();
        let written = flood_fill(&mut twice, PixelCoord::new(4, 4), BG, PAINT, 20);
        assert_eq!(written, 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_seed_outside_buffer() {
        let mut buffer = boxed_buffer();
        let before = buffer.clone();
        for seed in [
            PixelCoord::new(-1, 4),
            PixelCoord::new(10, 4),
            PixelCoord::new(4, 10),
            PixelCoord::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(flood_fill(&mut buffer, seed, BG, PAINT, 20), 0);
        }
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_seed_on_boundary_does_nothing() {
        let mut buffer = boxed_buffer();
        let before = buffer.clone();
        assert_eq!(
            flood_fill(&mut buffer, PixelCoord::new(2, 2), BG, PAINT, 20),
            0
        );
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_large_region_does_not_recurse() {
        let mut buffer = PixelBuffer::new(640, 400, BG);
        let written = flood_fill(&mut buffer, PixelCoord::new(320, 200), BG, PAINT, 20);
        assert_eq!(written, 640 * 400);
        assert_eq!(buffer.count(PAINT), 640 * 400);
    }
}
