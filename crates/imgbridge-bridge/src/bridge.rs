use imgbridge_frame::{encode_frame, try_decode_frame, DecodeSummary, FrameError, PixelBuffer};

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::host::{PixelSource, Region, TextFields};

/// What a render did with the inbound field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Inbound field was empty; the upstream frame passed through.
    Passthrough,
    /// Inbound payload was decoded over the upstream frame.
    Decoded(DecodeSummary),
    /// Inbound payload was malformed; the upstream frame passed through.
    Rejected(FrameError),
}

/// Runs the encode/decode pass for each frame request.
///
/// No pixels are kept between requests: every render fetches, encodes and
/// publishes afresh.
pub struct Bridge<S, F> {
    source: S,
    fields: F,
    config: BridgeConfig,
}

impl<S: PixelSource, F: TextFields> Bridge<S, F> {
    /// Create a bridge with the default field names.
    pub fn new(source: S, fields: F) -> Self {
        Self {
            source,
            fields,
            config: BridgeConfig::default(),
        }
    }

    /// Create a bridge with an explicit, validated config.
    pub fn with_config(source: S, fields: F, config: BridgeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            fields,
            config,
        })
    }

    /// Produce the output frame for `region`.
    pub fn render(&mut self, region: &Region) -> PixelBuffer {
        self.render_with_outcome(region).0
    }

    /// Produce the output frame for `region` and report what happened.
    ///
    /// 1. Fetch the upstream frame; this is the passthrough result.
    /// 2. Publish its payload to the outbound field.
    /// 3. If the inbound field is non-empty, decode it over the frame. A
    ///    malformed payload leaves the upstream frame as is.
    pub fn render_with_outcome(&mut self, region: &Region) -> (PixelBuffer, RenderOutcome) {
        let _span = tracing::debug_span!(
            "render",
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height
        )
        .entered();

        let mut frame = self.source.fetch_frame(region);

        let outbound = encode_frame(&frame);
        self.fields
            .publish_text(&self.config.outbound_field, &outbound);

        let inbound = self.fields.read_text(&self.config.inbound_field);
        let outcome = if inbound.is_empty() {
            RenderOutcome::Passthrough
        } else {
            match try_decode_frame(&inbound, &mut frame) {
                Ok(summary) => {
                    tracing::debug!(
                        source = %summary.source,
                        written = summary.samples_written,
                        clamped = summary.clamped,
                        "applied inbound payload"
                    );
                    RenderOutcome::Decoded(summary)
                }
                Err(err) => {
                    tracing::warn!(
                        field = %self.config.inbound_field,
                        error = %err,
                        "ignoring malformed inbound payload"
                    );
                    RenderOutcome::Rejected(err)
                }
            }
        };

        (frame, outcome)
    }

    /// Host notification that `field` changed.
    ///
    /// Returns `true` when the change affects rendering (the inbound field);
    /// the host should then drop any output it has cached and request a new
    /// frame.
    pub fn field_changed(&self, field: &str) -> bool {
        if field != self.config.inbound_field {
            return false;
        }
        tracing::debug!(field, "inbound field changed");
        true
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    pub fn into_parts(self) -> (S, F) {
        (self.source, self.fields)
    }
}
