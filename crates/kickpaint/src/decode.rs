//! Decode a drawing program into stroke instructions and fill requests.
//!
//! # Decoding Model
//!
//! The decoder makes one forward pass over two-byte tokens and keeps a single
//! piece of state, the pen. Strokes are emitted in stream order. Flood fills
//! are collected separately because they can only run once every stroke has
//! been rasterized.
//!
//! Coordinates in the stream are unsigned byte offsets from a fixed origin.
//! The default origin sits on half-pixel positions so one-pixel strokes land
//! squarely on a single row or column of pixels.

use log::{debug, trace};

use crate::commands::{COMMAND_GROUP_LEN, OP_FLOOD_FILL, OP_POLYLINE, TOKEN_LEN};
use crate::error::DecodeError;
use crate::palette::Palette;
use crate::types::{PixelCoord, Point};

/// Origin added to every raw coordinate pair.
pub const DEFAULT_ORIGIN: Point = Point::new(70.5, 40.5);

/// Options controlling how raw coordinates map into canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    pub origin: Point,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN,
        }
    }
}

/// A stroke instruction, replayed in order against a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Start a polyline: select the stroke color and place the pen.
    SetStrokeColor { color: u8, pen: Point },
    /// Line from the pen to a new point in the current stroke color.
    DrawSegment { from: Point, to: Point },
}

/// A deferred flood fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRequest {
    /// Seed point in canvas space.
    pub point: Point,
    /// Palette index of the fill color.
    pub color: u8,
}

impl FillRequest {
    /// The pixel the fill starts from.
    pub fn seed(&self) -> PixelCoord {
        self.point.to_pixel()
    }
}

/// The decoded form of a drawing program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
    pub fills: Vec<FillRequest>,
}

impl Program {
    /// Number of polylines started.
    pub fn polylines(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::SetStrokeColor { .. }))
            .count()
    }

    /// Number of line segments.
    pub fn segments(&self) -> usize {
        self.instructions.len() - self.polylines()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty() && self.fills.is_empty()
    }
}

/// Decode `bytes` using the default origin.
///
/// Decoding stops at the `FF FF` terminator or when fewer than two bytes
/// remain. Any error aborts the whole decode; no partial program is returned.
///
/// # Errors
///
/// Returns `DecodeError::InvalidColorIndex` if a polyline or fill names a
/// color outside `palette`.
/// Returns `DecodeError::TruncatedStream` if a polyline or fill opcode is not
/// followed by a complete point.
/// Returns `DecodeError::SegmentWithoutPolyline` if a point appears before
/// the first polyline.
pub fn decode(bytes: &[u8], palette: &Palette) -> Result<Program, DecodeError> {
    decode_with(bytes, palette, &DecodeOptions::default())
}

/// Decode `bytes` with explicit options.
pub fn decode_with(
    bytes: &[u8],
    palette: &Palette,
    options: &DecodeOptions,
) -> Result<Program, DecodeError> {
    let program = Decoder::new(bytes, palette, options.origin).run()?;
    debug!(
        "decoded {} bytes: {} polylines, {} segments, {} fills",
        bytes.len(),
        program.polylines(),
        program.segments(),
        program.fills.len()
    );
    Ok(program)
}

/// Decoder state.
struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    palette: &'a Palette,
    origin: Point,
    pen: Option<Point>,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8], palette: &'a Palette, origin: Point) -> Self {
        Self {
            data,
            pos: 0,
            palette,
            origin,
            pen: None,
        }
    }

    fn run(mut self) -> Result<Program, DecodeError> {
        let mut program = Program::default();

        while let Some([first, second]) = self.next_token() {
            let offset = self.pos - TOKEN_LEN;
            trace!("token {first:02X} {second:02X} at {offset}");

            match (first, second) {
                (OP_POLYLINE, OP_POLYLINE) => break,

                (OP_POLYLINE, color) => {
                    self.check_color(color, offset)?;
                    let pen = self.read_point(offset)?;
                    self.pen = Some(pen);
                    program
                        .instructions
                        .push(Instruction::SetStrokeColor { color, pen });
                }

                (OP_FLOOD_FILL, color) => {
                    self.check_color(color, offset)?;
                    let point = self.read_point(offset)?;
                    program.fills.push(FillRequest { point, color });
                }

                (x, y) => {
                    let from = self
                        .pen
                        .ok_or(DecodeError::SegmentWithoutPolyline { offset })?;
                    let to = self.to_canvas(x, y);
                    self.pen = Some(to);
                    program
                        .instructions
                        .push(Instruction::DrawSegment { from, to });
                }
            }
        }

        Ok(program)
    }

    /// Read the next token, or `None` if fewer than two bytes remain.
    fn next_token(&mut self) -> Option<[u8; 2]> {
        let token = self.data.get(self.pos..self.pos + TOKEN_LEN)?;
        self.pos += TOKEN_LEN;
        Some([token[0], token[1]])
    }

    /// Read the point that completes the command group starting at `offset`.
    fn read_point(&mut self, offset: usize) -> Result<Point, DecodeError> {
        let [x, y] = self
            .next_token()
            .ok_or(DecodeError::TruncatedStream { offset })?;
        debug_assert_eq!(self.pos - offset, COMMAND_GROUP_LEN);
        Ok(self.to_canvas(x, y))
    }

    fn check_color(&self, index: u8, offset: usize) -> Result<(), DecodeError> {
        if self.palette.contains(index) {
            Ok(())
        } else {
            Err(DecodeError::InvalidColorIndex {
                index,
                palette_len: self.palette.len(),
                offset,
            })
        }
    }

    fn to_canvas(&self, x: u8, y: u8) -> Point {
        self.origin.offset(x as f32, y as f32)
    }
}
