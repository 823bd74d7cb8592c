//! Identity the bridge presents to a compositing host's node registry.

/// Node class name.
pub const CLASS_NAME: &str = "ImageBridge";

/// Menu location for node creation.
pub const MENU_PATH: &str = "ML/ImageBridge";

/// Node help text.
pub const HELP: &str = "Simple image<->base64 bridge. Encodes the current image to the \
image_to_send field.\nIf image_received holds base64 data, displays it. Otherwise passes \
the input through.\nAll networking is handled outside the node.";
