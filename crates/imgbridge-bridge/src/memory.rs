//! In-process collaborators for tests and command-line use.

use std::collections::BTreeMap;

use imgbridge_frame::PixelBuffer;

use crate::host::{PixelSource, Region, TextFields};

/// Text fields held in a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryFields {
    values: BTreeMap<String, String>,
    publishes: usize,
}

impl MemoryFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field as an external writer would.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Number of [`TextFields::publish_text`] calls so far.
    pub fn publish_count(&self) -> usize {
        self.publishes
    }
}

impl TextFields for MemoryFields {
    fn read_text(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    fn publish_text(&mut self, field: &str, value: &str) {
        self.publishes += 1;
        self.set(field, value);
    }
}

/// Serves regions cut from one fixed frame whose origin is `(0, 0)`.
///
/// Samples outside the frame read as `0.0`.
#[derive(Debug, Clone)]
pub struct StaticSource {
    frame: PixelBuffer,
    fetches: usize,
}

impl StaticSource {
    pub fn new(frame: PixelBuffer) -> Self {
        Self { frame, fetches: 0 }
    }

    /// Swap the upstream frame; the next fetch serves the new one.
    pub fn replace(&mut self, frame: PixelBuffer) {
        self.frame = frame;
    }

    /// Number of [`PixelSource::fetch_frame`] calls so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    fn sample_at(&self, channel: usize, x: i64, y: i64) -> f32 {
        let (Ok(column), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
            return 0.0;
        };
        self.frame.get(channel, row, column).unwrap_or(0.0)
    }
}

impl PixelSource for StaticSource {
    fn fetch_frame(&mut self, region: &Region) -> PixelBuffer {
        self.fetches += 1;
        let built = PixelBuffer::from_fn(
            region.width,
            region.height,
            self.frame.channels(),
            |channel, row, column| {
                let x = region.x.saturating_add_unsigned(column as u64);
                let y = region.y.saturating_add_unsigned(row as u64);
                self.sample_at(channel, x, y)
            },
        );
        match built {
            Ok(frame) => frame,
            Err(err) => {
                tracing::warn!(error = %err, ?region, "region too large, serving empty frame");
                PixelBuffer::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, 1, |_, y, x| (y * width + x) as f32).unwrap()
    }

    #[test]
    fn unset_field_reads_empty() {
        let fields = MemoryFields::new();
        assert_eq!(fields.read_text("image_received"), "");
        assert_eq!(fields.publish_count(), 0);
    }

    #[test]
    fn publish_overwrites_and_counts() {
        let mut fields = MemoryFields::new();
        fields.publish_text("out", "a");
        fields.publish_text("out", "b");
        assert_eq!(fields.get("out"), Some("b"));
        assert_eq!(fields.publish_count(), 2);
    }

    #[test]
    fn external_set_is_not_a_publish() {
        let mut fields = MemoryFields::new();
        fields.set("in", "payload");
        assert_eq!(fields.read_text("in"), "payload");
        assert_eq!(fields.publish_count(), 0);
    }

    #[test]
    fn full_region_returns_frame() {
        let frame = ramp(3, 2);
        let mut source = StaticSource::new(frame.clone());
        assert_eq!(source.fetch_frame(&Region::at_origin(3, 2)), frame);
        assert_eq!(source.fetch_count(), 1);
    }

    #[test]
    fn offset_region_crops_and_pads_with_zero() {
        let mut source = StaticSource::new(ramp(3, 2));
        let cropped = source.fetch_frame(&Region::new(1, 1, 3, 2));
        assert_eq!(cropped.samples(), &[4.0, 5.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn negative_origin_reads_zero_outside() {
        let mut source = StaticSource::new(ramp(2, 2));
        let shifted = source.fetch_frame(&Region::new(-1, 1, 2, 1));
        assert_eq!(shifted.samples(), &[0.0, 2.0]);
    }

    fn touch(mut source: impl PixelSource, mut fields: impl TextFields) {
        source.fetch_frame(&Region::at_origin(1, 1));
        fields.publish_text("out", "x");
    }

    #[test]
    fn borrowed_collaborators_forward() {
        let mut source = StaticSource::new(ramp(1, 1));
        let mut fields = MemoryFields::new();
        touch(&mut source, &mut fields);
        assert_eq!(source.fetch_count(), 1);
        assert_eq!(fields.get("out"), Some("x"));
    }
}
