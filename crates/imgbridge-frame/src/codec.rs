use crate::error::{FrameError, Result};
use crate::header::{FrameHeader, SEPARATOR};
use crate::pixel::{read_ne_samples, PixelBuffer};

/// Outcome of a successful [`try_decode_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Dimensions declared by the payload header.
    pub source: FrameHeader,
    /// Whole f32 samples recovered from the data section.
    pub samples_available: usize,
    /// Samples written into the target.
    pub samples_written: usize,
    /// The payload dimensions differed from the target's.
    pub clamped: bool,
    /// The data section held fewer samples than the clamped region needed.
    pub truncated: bool,
}

/// Encode a pixel buffer as `<width>,<height>,<channels>|<base64>`.
///
/// Wire format:
/// ```text
/// ┌──────────────────────────┬─────┬──────────────────────────────────┐
/// │ Header (decimal, ASCII)  │ Sep │ Data (base64, padded)            │
/// │ "<w>,<h>,<c>"            │ "|" │ w*h*c native-endian f32, planar  │
/// └──────────────────────────┴─────┴──────────────────────────────────┘
/// ```
pub fn encode_frame(buffer: &PixelBuffer) -> String {
    let header = buffer.header().to_string();
    let data = imgbridge_codec::encode(&buffer.to_ne_bytes());

    let mut payload = String::with_capacity(header.len() + 1 + data.len());
    payload.push_str(&header);
    payload.push(SEPARATOR);
    payload.push_str(&data);

    tracing::debug!(
        header = %header,
        bytes = buffer.byte_len(),
        payload_len = payload.len(),
        "encoded frame payload"
    );
    payload
}

/// Decode a payload into `target`, reporting why it was rejected.
///
/// Samples are copied plane by plane using the payload's own strides, clamped
/// per axis to the smaller of payload and target extents and to the number of
/// samples actually present. Target samples outside the copied region keep
/// their previous values, and so does the whole target on error.
pub fn try_decode_frame(payload: &str, target: &mut PixelBuffer) -> Result<DecodeSummary> {
    let (source, data) = FrameHeader::split_payload(payload)?;

    let bytes = imgbridge_codec::decode(data);
    if bytes.is_empty() {
        return Err(FrameError::EmptyPayload);
    }
    let samples = read_ne_samples(&bytes);

    let channels = source.channels.min(target.channels());
    let rows = source.height.min(target.height());
    let columns = source.width.min(target.width());
    let (target_height, target_width) = (target.height(), target.width());
    let dst = target.samples_mut();

    let mut written = 0usize;
    'planes: for channel in 0..channels {
        for row in 0..rows {
            let Some(src_start) = source_offset(&source, channel, row) else {
                break 'planes;
            };
            let available = samples.len().saturating_sub(src_start);
            if available == 0 {
                break 'planes;
            }
            let count = columns.min(available);

            let dst_start = (channel * target_height + row) * target_width;
            dst[dst_start..dst_start + count]
                .copy_from_slice(&samples[src_start..src_start + count]);
            written += count;

            if count < columns {
                break 'planes;
            }
        }
    }

    let summary = DecodeSummary {
        source,
        samples_available: samples.len(),
        samples_written: written,
        clamped: source != target.header(),
        truncated: written < channels * rows * columns,
    };
    if summary.clamped || summary.truncated {
        tracing::trace!(
            source = %source,
            target = %target.header(),
            written,
            truncated = summary.truncated,
            "clamped frame payload to target"
        );
    }
    Ok(summary)
}

/// Decode a payload into `target`.
///
/// Returns `false` when the payload has no separator, an unparseable header,
/// or no data; `target` is then left untouched. Returns `true` otherwise, even
/// when the copy was clamped.
pub fn decode_frame(payload: &str, target: &mut PixelBuffer) -> bool {
    match try_decode_frame(payload, target) {
        Ok(summary) => {
            tracing::debug!(
                source = %summary.source,
                written = summary.samples_written,
                clamped = summary.clamped,
                "decoded frame payload"
            );
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, "rejected frame payload");
            false
        }
    }
}

fn source_offset(source: &FrameHeader, channel: usize, row: usize) -> Option<usize> {
    channel
        .checked_mul(source.height)?
        .checked_add(row)?
        .checked_mul(source.width)
}
