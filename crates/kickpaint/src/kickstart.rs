//! The built-in "insert floppy" drawing.
//!
//! A hand-authored program that reproduces the 320x200 boot screen of an
//! early home computer ROM: a hand holding a floppy disk. It draws 15
//! polylines and queues 11 flood fills over the four-color
//! [`Palette::kickstart`] palette.

use crate::hex::decode_hex;
use crate::palette::Palette;

/// The drawing program as uppercase hex pairs, split at command boundaries.
pub const KICKSTART_HEX: &str = concat!(
    "FF01230B3A0B3A217121710B7D0B8816885E7F5E7F3840383E36353634382D382D412348",
    "230B",
    "FE022545",
    "FF012148210A7E0A8A168A5F565F5664526C4E714A74447D3C813C8C0A8C0A6D096D0951",
    "0D4B14451541193A1E37213621361E381A3A164115450E4B0A510A6C0B6D0B8B288B2876",
    "30763472345F325C3252414541393E373B373E3A3E413D423642333F2A461E4C12551254",
    "1E4B1A4A17471A491E4A2148",
    "FF01323D34363C373D3A3D413641323D",
    "FF01335C3352424542397D397D5E345E335A",
    "FF013C0B6F0B6F203C203C0B",
    "FF01600E6B0E6B1C601C600E",
    "FE033E1F",
    "FF01620F690F691B621B620F",
    "FE02631A",
    "FF012F393239323B2F3F2F39",
    "FF01298B2977307735723569396B416B416D457249724974437D3B803B8B298B",
    "FF01355F35643A61355F",
    "FF0139623564355F4A5F40693F6941673C623962",
    "FF014E5F555F5564516C4E7049714671436D436A4E5F",
    "FF01446A446D467048704C6F4D6C4969446A",
    "FF0136683E6A40673C63396336653668",
    "FF017E0B8916895E",
    "FE01220B",
    "FE013B0B",
    "FE01610F",
    "FE016A1B",
    "FE01700F",
    "FE017E5E",
    "FE014B60",
    "FE012E39",
    "FFFF",
);

/// The drawing program as raw bytes.
pub fn kickstart_bytes() -> Vec<u8> {
    decode_hex(KICKSTART_HEX).unwrap_or_default()
}

/// The palette the drawing was authored against.
pub fn kickstart_palette() -> Palette {
    Palette::kickstart()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::END_OF_PROGRAM;

    #[test]
    fn hex_is_well_formed() {
        let bytes = decode_hex(KICKSTART_HEX).unwrap();
        assert_eq!(bytes.len(), 412);
        assert!(bytes.ends_with(&END_OF_PROGRAM));
    }

    #[test]
    fn decodes_against_its_palette() {
        let program = crate::decode(&kickstart_bytes(), &kickstart_palette()).unwrap();
        assert_eq!(program.polylines(), 15);
        assert_eq!(program.segments(), 153);
        assert_eq!(program.fills.len(), 11);
    }
}
