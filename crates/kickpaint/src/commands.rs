//! Opcode bytes for drawing programs.
//!
//! A program is read two bytes at a time. The first byte of a token is either
//! a reserved opcode or the x coordinate of a plain point.
//!
//! # Token Patterns
//!
//! - `FF FF` - end of program
//! - `FF cc` `xx yy` - start a polyline in palette color `cc` at `(xx, yy)`
//! - `FE cc` `xx yy` - flood fill with palette color `cc` seeded at `(xx, yy)`
//! - `xx yy` - line from the pen to `(xx, yy)`
//!
//! Because `0xFE` and `0xFF` are reserved, a point whose x coordinate is 254
//! or 255 can never be written as a plain segment endpoint.

// ============================================================================
// Opcodes
// ============================================================================

/// Start a polyline. Args: color index, then one point token.
pub const OP_POLYLINE: u8 = 0xFF;

/// Queue a flood fill. Args: color index, then one point token.
pub const OP_FLOOD_FILL: u8 = 0xFE;

/// End of program marker.
pub const END_OF_PROGRAM: [u8; 2] = [0xFF, 0xFF];

// ============================================================================
// Layout
// ============================================================================

/// Bytes per token.
pub const TOKEN_LEN: usize = 2;

/// Bytes in an opcode token plus its point token.
pub const COMMAND_GROUP_LEN: usize = 2 * TOKEN_LEN;

/// Returns true if `byte` is reserved as an opcode in the first position of a token.
pub const fn is_opcode(byte: u8) -> bool {
    byte == OP_POLYLINE || byte == OP_FLOOD_FILL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_bytes() {
        assert!(is_opcode(0xFF));
        assert!(is_opcode(0xFE));
        assert!(!is_opcode(0xFD));
        assert!(!is_opcode(0x00));
    }

    #[test]
    fn end_marker_shares_polyline_opcode() {
        assert_eq!(END_OF_PROGRAM[0], OP_POLYLINE);
    }
}
