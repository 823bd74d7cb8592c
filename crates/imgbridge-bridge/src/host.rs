use imgbridge_frame::PixelBuffer;

/// Rectangle of the image plane requested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge, in the host's pixel coordinates.
    pub x: i64,
    /// Bottom edge, in the host's pixel coordinates.
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Region anchored at the origin.
    pub fn at_origin(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }
}

/// Upstream provider of planar frames.
pub trait PixelSource {
    /// Fetch the frame covering `region`. The returned buffer is owned by the
    /// caller, which may overwrite it.
    fn fetch_frame(&mut self, region: &Region) -> PixelBuffer;
}

/// Host-side text parameters.
///
/// The host notifies the bridge of changes through
/// [`Bridge::field_changed`](crate::Bridge::field_changed).
pub trait TextFields {
    /// Current value of `field`; empty when unset.
    fn read_text(&self, field: &str) -> String;

    /// Replace the value of `field`.
    fn publish_text(&mut self, field: &str, value: &str);
}

impl<T: PixelSource + ?Sized> PixelSource for &mut T {
    fn fetch_frame(&mut self, region: &Region) -> PixelBuffer {
        (**self).fetch_frame(region)
    }
}

impl<T: TextFields + ?Sized> TextFields for &mut T {
    fn read_text(&self, field: &str) -> String {
        (**self).read_text(field)
    }

    fn publish_text(&mut self, field: &str, value: &str) {
        (**self).publish_text(field, value)
    }
}
