use std::fmt;
use std::str::FromStr;

use crate::error::{FrameError, Result};
use crate::pixel::SAMPLE_SIZE;

/// Separator between the dimension header and the base64 data.
pub const SEPARATOR: char = '|';

/// Dimensions carried in front of every payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FrameHeader {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl FrameHeader {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Number of f32 samples described by the header.
    pub fn sample_count(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.channels)
    }

    /// Number of raw bytes described by the header.
    pub fn byte_len(&self) -> Option<usize> {
        self.sample_count()?.checked_mul(SAMPLE_SIZE)
    }

    /// Parse `<width>,<height>,<channels>`.
    ///
    /// Each integer may carry leading whitespace and a `+` sign. The first two
    /// must be followed directly by `,`; anything after the third is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || FrameError::InvalidHeader(text.to_string());

        let (width, rest) = leading_uint(text).ok_or_else(invalid)?;
        let rest = rest.strip_prefix(',').ok_or_else(invalid)?;
        let (height, rest) = leading_uint(rest).ok_or_else(invalid)?;
        let rest = rest.strip_prefix(',').ok_or_else(invalid)?;
        let (channels, _) = leading_uint(rest).ok_or_else(invalid)?;

        Ok(Self::new(width, height, channels))
    }

    /// Split a payload into its parsed header and the base64 data after `|`.
    pub fn split_payload(payload: &str) -> Result<(Self, &str)> {
        let (header, data) = payload
            .split_once(SEPARATOR)
            .ok_or(FrameError::MissingSeparator)?;
        Ok((Self::parse(header)?, data))
    }
}

impl fmt::Display for FrameHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.width, self.height, self.channels)
    }
}

impl FromStr for FrameHeader {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn leading_uint(text: &str) -> Option<(usize, &str)> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if digits == 0 {
        return None;
    }
    let value = text[..digits].parse().ok()?;
    Some((value, &text[digits..]))
}
