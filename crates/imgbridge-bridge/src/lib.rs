//! Per-frame orchestration between a pixel source and two text fields.
//!
//! On every render request the [`Bridge`] fetches the upstream frame, publishes
//! its encoding to the outbound field, and, when the inbound field holds a
//! payload, decodes it over the frame it returns. Anything that goes wrong on
//! the inbound side leaves the upstream frame passing through.

pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
pub mod memory;
pub mod node;

pub use bridge::{Bridge, RenderOutcome};
pub use config::{BridgeConfig, DEFAULT_INBOUND_FIELD, DEFAULT_OUTBOUND_FIELD};
pub use error::{BridgeError, Result};
pub use host::{PixelSource, Region, TextFields};
pub use memory::{MemoryFields, StaticSource};
pub use node::{CLASS_NAME, HELP, MENU_PATH};
