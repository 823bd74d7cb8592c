//! The 64-symbol standard alphabet.

/// Symbols indexed by their 6-bit value.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding symbol.
pub const PAD: u8 = b'=';

/// Returns the 6-bit value of an alphabet symbol, or `None` for anything else
/// (padding included).
pub fn symbol_value(symbol: u8) -> Option<u8> {
    match symbol {
        b'A'..=b'Z' => Some(symbol - b'A'),
        b'a'..=b'z' => Some(symbol - b'a' + 26),
        b'0'..=b'9' => Some(symbol - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_maps_back_to_its_index() {
        for (index, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol_value(symbol), Some(index as u8));
        }
    }

    #[test]
    fn table_matches_standard_engine_alphabet() {
        assert_eq!(
            ALPHABET.as_slice(),
            ::base64::alphabet::STANDARD.as_str().as_bytes()
        );
    }

    #[test]
    fn padding_and_whitespace_are_not_symbols() {
        assert_eq!(symbol_value(PAD), None);
        assert_eq!(symbol_value(b' '), None);
        assert_eq!(symbol_value(b'\n'), None);
        assert_eq!(symbol_value(b'-'), None);
        assert_eq!(symbol_value(b'_'), None);
        assert_eq!(symbol_value(0xC3), None);
    }
}
