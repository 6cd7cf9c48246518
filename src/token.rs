//! URL-safe token encoding of compressed diagram data.
//!
//! Three input bytes become four output symbols drawn from a 64-symbol
//! alphabet. The render server applies the inverse mapping, so both the
//! table and the bit layout must match it exactly; a deviation renders the
//! wrong diagram with no error signal anywhere.

/// Symbol table indexed by 6-bit value: digits, uppercase, lowercase, '-', '_'.
///
/// This is the server's table, not standard base64.
const SYMBOLS: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Encode compressed bytes as a URL-safe token.
///
/// Output length is always `4 * ceil(data.len() / 3)`. Missing trailing
/// bytes in the final group are read as zero and all four symbols are
/// still emitted; the server expects exactly this shape for short tails.
pub fn encode(data: &[u8]) -> String {
    let mut token = String::with_capacity(data.len().div_ceil(3) * 4);
    for group in data.chunks(3) {
        let b1 = group[0];
        let b2 = group.get(1).copied().unwrap_or(0);
        let b3 = group.get(2).copied().unwrap_or(0);
        append_group(&mut token, b1, b2, b3);
    }
    token
}

/// Split three bytes into four 6-bit values and append their symbols.
fn append_group(token: &mut String, b1: u8, b2: u8, b3: u8) {
    let s1 = b1 >> 2;
    let s2 = ((b1 & 0x3) << 4) | (b2 >> 4);
    let s3 = ((b2 & 0xF) << 2) | (b3 >> 6);
    let s4 = b3 & 0x3F;
    for value in [s1, s2, s3, s4] {
        token.push(SYMBOLS[usize::from(value & 0x3F)] as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_empty_token() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_full_group() {
        assert_eq!(encode(&[0x00, 0x00, 0x00]), "0000");
        assert_eq!(encode(&[0xFF, 0xFF, 0xFF]), "____");
    }

    #[test]
    fn test_bit_layout() {
        // 0x04 0x11 0x04 splits into the 6-bit values 1, 1, 4, 4.
        assert_eq!(encode(&[0x04, 0x11, 0x04]), "1144");
    }

    #[test]
    fn test_partial_groups_read_missing_bytes_as_zero() {
        // One or two trailing bytes still emit all four symbols.
        assert_eq!(encode(&[0xFF]), "_m00");
        assert_eq!(encode(&[0xFF, 0xFF]), "__y0");
    }

    #[test]
    fn test_symbol_table_boundaries() {
        assert_eq!(SYMBOLS[0], b'0');
        assert_eq!(SYMBOLS[9], b'9');
        assert_eq!(SYMBOLS[10], b'A');
        assert_eq!(SYMBOLS[35], b'Z');
        assert_eq!(SYMBOLS[36], b'a');
        assert_eq!(SYMBOLS[61], b'z');
        assert_eq!(SYMBOLS[62], b'-');
        assert_eq!(SYMBOLS[63], b'_');
    }

    #[test]
    fn test_length_law() {
        for len in 0..32 {
            let data = vec![0xA5u8; len];
            assert_eq!(encode(&data).len(), len.div_ceil(3) * 4, "input length {len}");
        }
    }

    #[test]
    fn test_alphabet_closure() {
        let data: Vec<u8> = (0..=255).collect();
        for c in encode(&data).chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '-' || c == '_',
                "symbol {c:?} outside the token alphabet"
            );
        }
    }
}
