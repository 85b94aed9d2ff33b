//! Hex text encoding for drawing programs.
//!
//! Programs are usually authored as a run of uppercase hex pairs with no
//! separators, e.g. `FF01230B3A0B...FFFF`. Whitespace between digits is
//! ignored so long programs can be wrapped.

use crate::error::HexError;

/// Decode hex text into bytes.
///
/// # Example
/// ```
/// use kickpaint::decode_hex;
/// assert_eq!(decode_hex("FF00 0a0a").unwrap(), vec![0xFF, 0x00, 0x0A, 0x0A]);
/// ```
pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let mut bytes = Vec::with_capacity(text.len() / 2);
    let mut high: Option<u8> = None;
    let mut digits = 0;

    for (offset, ch) in text.char_indices() {
        if ch.is_ascii_whitespace() {
            continue;
        }
        let nibble = ch
            .to_digit(16)
            .ok_or(HexError::InvalidDigit { ch, offset })? as u8;
        digits += 1;

        match high.take() {
            Some(h) => bytes.push((h << 4) | nibble),
            None => high = Some(nibble),
        }
    }

    if high.is_some() {
        return Err(HexError::OddLength { digits });
    }
    Ok(bytes)
}

/// Encode bytes as uppercase hex pairs with no separators.
///
/// # Example
/// ```
/// use kickpaint::encode_hex;
/// assert_eq!(encode_hex(&[0xFE, 0x02, 0x25, 0x45]), "FE022545");
/// ```
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{byte:02X}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_uppercase_pairs() {
        assert_eq!(
            decode_hex("FF00140AFFFF").unwrap(),
            vec![0xFF, 0x00, 0x14, 0x0A, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_decode_skips_whitespace() {
        assert_eq!(decode_hex(" FF\n0\t1 ").unwrap(), vec![0xFF, 0x01]);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_hex("").unwrap().is_empty());
        assert!(decode_hex("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_decode_odd_length_fails() {
        assert_eq!(decode_hex("FFF"), Err(HexError::OddLength { digits: 3 }));
    }

    #[test]
    fn test_decode_invalid_digit_fails() {
        assert_eq!(
            decode_hex("FFZZ"),
            Err(HexError::InvalidDigit { ch: 'Z', offset: 2 })
        );
    }

    #[test]
    fn test_encode_is_uppercase() {
        assert_eq!(encode_hex(&[0x0a, 0xbc]), "0ABC");
        assert_eq!(encode_hex(&[]), "");
    }
}
