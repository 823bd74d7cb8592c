/// Errors that can occur while building or decoding frames.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The payload has no `|` between header and data.
    #[error("payload has no '|' header separator")]
    MissingSeparator,

    /// The header is not three comma-separated non-negative integers.
    #[error("invalid frame header: {0:?}")]
    InvalidHeader(String),

    /// The data section decoded to zero bytes.
    #[error("payload data is empty")]
    EmptyPayload,

    /// The sample vector does not match the declared dimensions.
    #[error("sample count mismatch (expected {expected}, got {actual})")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// `width * height * channels * 4` does not fit in `usize`.
    #[error("frame dimensions {width}x{height}x{channels} overflow")]
    DimensionsOverflow {
        width: usize,
        height: usize,
        channels: usize,
    },
}

pub type Result<T> = std::result::Result<T, FrameError>;
