//! Carry planar f32 images through text-only parameter fields.
//!
//! imgbridge turns a pixel buffer into a printable `<w>,<h>,<c>|<base64>`
//! payload and back, and runs the per-frame exchange between an upstream
//! image and two host text fields.
//!
//! # Crate Structure
//!
//! - [`codec`]: Tolerant standard-alphabet base64
//! - [`frame`]: Header-prefixed framing of planar f32 buffers
//! - [`bridge`]: Per-frame orchestration (behind `bridge` feature)

/// Re-export codec functions.
pub mod codec {
    pub use imgbridge_codec::*;
}

/// Re-export frame types.
pub mod frame {
    pub use imgbridge_frame::*;
}

/// Re-export bridge types (requires `bridge` feature).
#[cfg(feature = "bridge")]
pub mod bridge {
    pub use imgbridge_bridge::*;
}
