//! Header-prefixed text framing of planar f32 pixel buffers.
//!
//! Every payload is a dimension header followed by the base64 encoding of the
//! raw samples:
//! - `<width>,<height>,<channels>` as decimal integers
//! - a `|` separator
//! - base64 of `width * height * channels` native-endian f32 values, planar
//!   (channel, then row, then column)
//!
//! Decoding tolerates a size mismatch against the destination by clamping
//! each axis.

pub mod codec;
pub mod error;
pub mod header;
pub mod pixel;

pub use codec::{decode_frame, encode_frame, try_decode_frame, DecodeSummary};
pub use error::{FrameError, Result};
pub use header::{FrameHeader, SEPARATOR};
pub use pixel::{PixelBuffer, SAMPLE_SIZE};
