use ::base64::alphabet::STANDARD as STANDARD_ALPHABET;
use ::base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use ::base64::engine::DecodePaddingMode;
use ::base64::Engine as _;

use crate::alphabet::{symbol_value, PAD};

/// Standard alphabet, padding optional, non-zero trailing bits accepted.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &STANDARD_ALPHABET,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Length of the padded text produced by [`encode`] for `byte_len` input bytes.
pub const fn encoded_len(byte_len: usize) -> usize {
    byte_len.div_ceil(3) * 4
}

/// Upper bound on the bytes [`decode`] can produce from `text_len` characters.
pub fn decoded_len_estimate(text_len: usize) -> usize {
    ::base64::decoded_len_estimate(text_len)
}

/// Encode bytes as padded base64 text.
///
/// Every 3-byte group becomes 4 symbols. A trailing group of 1 byte becomes
/// 2 symbols plus `==`; a trailing group of 2 bytes becomes 3 symbols plus `=`.
/// Empty input yields empty text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text, tolerating malformed input.
///
/// Characters outside the alphabet are skipped. The first `=` ends decoding.
/// A trailing group of `n` symbols (2..=3) yields `n - 1` bytes; a lone
/// unpadded symbol contributes nothing.
pub fn decode(text: &str) -> Vec<u8> {
    // Multi-byte UTF-8 sequences only contain bytes >= 0x80, which are never
    // alphabet symbols, so filtering bytes drops them whole.
    let mut symbols: Vec<u8> = text
        .bytes()
        .take_while(|&byte| byte != PAD)
        .filter(|&byte| symbol_value(byte).is_some())
        .collect();
    if symbols.len() % 4 == 1 {
        symbols.pop();
    }

    // Only alphabet symbols remain and no group is a single symbol, so the
    // lenient engine accepts every input here.
    LENIENT.decode(&symbols).unwrap_or_default()
}
