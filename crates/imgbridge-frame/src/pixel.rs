use bytes::{Buf, BufMut, BytesMut};

use crate::error::{FrameError, Result};
use crate::header::FrameHeader;

/// Bytes per f32 sample.
pub const SAMPLE_SIZE: usize = std::mem::size_of::<f32>();

/// Planar f32 image storage indexed `[channel][row][column]`.
///
/// Channel 0's full raster comes first, then channel 1's, and so on. Within a
/// channel, rows are stored top to bottom and columns left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelBuffer {
    header: FrameHeader,
    samples: Vec<f32>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        Self::filled(width, height, channels, 0.0)
    }

    /// Create a buffer with every sample set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: f32) -> Result<Self> {
        let header = FrameHeader::new(width, height, channels);
        let count = checked_sample_count(&header)?;
        Ok(Self {
            header,
            samples: vec![value; count],
        })
    }

    /// Wrap planar samples. `samples.len()` must equal `width * height * channels`.
    pub fn from_planar(
        width: usize,
        height: usize,
        channels: usize,
        samples: Vec<f32>,
    ) -> Result<Self> {
        let header = FrameHeader::new(width, height, channels);
        let expected = checked_sample_count(&header)?;
        if samples.len() != expected {
            return Err(FrameError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { header, samples })
    }

    /// Build a buffer by evaluating `f(channel, row, column)` for every sample.
    pub fn from_fn(
        width: usize,
        height: usize,
        channels: usize,
        mut f: impl FnMut(usize, usize, usize) -> f32,
    ) -> Result<Self> {
        let header = FrameHeader::new(width, height, channels);
        let count = checked_sample_count(&header)?;
        let mut samples = Vec::with_capacity(count);
        for channel in 0..channels {
            for row in 0..height {
                for column in 0..width {
                    samples.push(f(channel, row, column));
                }
            }
        }
        Ok(Self { header, samples })
    }

    /// Build a buffer from raw native-endian f32 bytes.
    pub fn from_ne_bytes(
        width: usize,
        height: usize,
        channels: usize,
        bytes: &[u8],
    ) -> Result<Self> {
        let header = FrameHeader::new(width, height, channels);
        let expected = header.byte_len().ok_or(FrameError::DimensionsOverflow {
            width,
            height,
            channels,
        })?;
        if bytes.len() != expected {
            return Err(FrameError::SampleCountMismatch {
                expected: expected / SAMPLE_SIZE,
                actual: bytes.len() / SAMPLE_SIZE,
            });
        }
        Self::from_planar(width, height, channels, read_ne_samples(bytes))
    }

    pub fn header(&self) -> FrameHeader {
        self.header
    }

    pub fn width(&self) -> usize {
        self.header.width
    }

    pub fn height(&self) -> usize {
        self.header.height
    }

    pub fn channels(&self) -> usize {
        self.header.channels
    }

    /// Size of the raw sample data in bytes.
    pub fn byte_len(&self) -> usize {
        self.samples.len() * SAMPLE_SIZE
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Flat index of a sample, or `None` when out of bounds.
    pub fn index(&self, channel: usize, row: usize, column: usize) -> Option<usize> {
        if channel >= self.channels() || row >= self.height() || column >= self.width() {
            return None;
        }
        Some((channel * self.height() + row) * self.width() + column)
    }

    pub fn get(&self, channel: usize, row: usize, column: usize) -> Option<f32> {
        self.index(channel, row, column).map(|i| self.samples[i])
    }

    pub fn get_mut(&mut self, channel: usize, row: usize, column: usize) -> Option<&mut f32> {
        let i = self.index(channel, row, column)?;
        self.samples.get_mut(i)
    }

    /// One channel's raster.
    pub fn plane(&self, channel: usize) -> Option<&[f32]> {
        let range = self.plane_range(channel)?;
        Some(&self.samples[range])
    }

    pub fn plane_mut(&mut self, channel: usize) -> Option<&mut [f32]> {
        let range = self.plane_range(channel)?;
        Some(&mut self.samples[range])
    }

    /// Raw sample bytes in native endianness, planar order.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        let mut out = BytesMut::with_capacity(self.byte_len());
        for &sample in &self.samples {
            out.put_f32_ne(sample);
        }
        out.to_vec()
    }

    fn plane_range(&self, channel: usize) -> Option<std::ops::Range<usize>> {
        if channel >= self.channels() {
            return None;
        }
        let plane_len = self.width() * self.height();
        let start = channel * plane_len;
        Some(start..start + plane_len)
    }
}

/// Read native-endian f32 values from `bytes`, four bytes at a time.
///
/// Trailing bytes that do not form a whole sample are ignored.
pub fn read_ne_samples(bytes: &[u8]) -> Vec<f32> {
    let mut src = bytes;
    let mut out = Vec::with_capacity(bytes.len() / SAMPLE_SIZE);
    while src.remaining() >= SAMPLE_SIZE {
        out.push(src.get_f32_ne());
    }
    out
}

fn checked_sample_count(header: &FrameHeader) -> Result<usize> {
    header
        .byte_len()
        .map(|len| len / SAMPLE_SIZE)
        .ok_or(FrameError::DimensionsOverflow {
            width: header.width,
            height: header.height,
            channels: header.channels,
        })
}
