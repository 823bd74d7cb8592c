//! Standard-alphabet base64 for carrying raw pixel bytes through text-only
//! parameter fields.
//!
//! Encoding follows RFC 4648 (`A-Z a-z 0-9 + /`, `=` padding). Decoding is
//! deliberately tolerant:
//! - characters outside the alphabet are skipped
//! - the first `=` ends the data
//! - a trailing partial group yields as many whole bytes as it can
//!
//! Neither direction can fail.

pub mod alphabet;
pub mod tolerant;

pub use alphabet::{symbol_value, ALPHABET, PAD};
pub use tolerant::{decode, decoded_len_estimate, encode, encoded_len};
