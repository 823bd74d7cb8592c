/// Errors raised while setting up a bridge.
///
/// Rendering never fails; these only come from configuration and from
/// building frames for collaborators.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Frame construction error.
    #[error("frame error: {0}")]
    Frame(#[from] imgbridge_frame::FrameError),

    /// Invalid configuration.
    #[error("invalid config: {0}")]
    Config(String),

    /// I/O error while loading configuration.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
