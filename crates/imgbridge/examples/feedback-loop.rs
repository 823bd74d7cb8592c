//! Simulated round trip through an external tool.
//!
//! The "tool" reads the outbound payload, inverts every sample, and writes
//! the result back into the inbound field. The next render picks it up.
//!
//! Run with:
//!   cargo run --example feedback-loop

use imgbridge::bridge::{Bridge, MemoryFields, Region, RenderOutcome, StaticSource};
use imgbridge::frame::{encode_frame, try_decode_frame, FrameHeader, PixelBuffer};

fn invert(payload: &str) -> Result<String, Box<dyn std::error::Error>> {
    let (header, _) = FrameHeader::split_payload(payload)?;
    let mut frame = PixelBuffer::new(header.width, header.height, header.channels)?;
    try_decode_frame(payload, &mut frame)?;
    for sample in frame.samples_mut() {
        *sample = 1.0 - *sample;
    }
    Ok(encode_frame(&frame))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let upstream = PixelBuffer::from_fn(4, 2, 3, |channel, row, column| {
        (channel + row + column) as f32 / 8.0
    })?;
    let region = Region::at_origin(upstream.width(), upstream.height());
    let mut bridge = Bridge::new(StaticSource::new(upstream), MemoryFields::new());

    let (first, outcome) = bridge.render_with_outcome(&region);
    eprintln!("first render: {outcome:?}, sample[1] = {:?}", first.get(0, 0, 1));

    let outbound = bridge
        .fields()
        .get("image_to_send")
        .unwrap_or_default()
        .to_string();
    eprintln!("outbound payload: {} chars", outbound.len());

    let inverted = invert(&outbound)?;
    bridge.fields_mut().set("image_received", inverted);
    bridge.field_changed("image_received");

    let (second, outcome) = bridge.render_with_outcome(&region);
    if let RenderOutcome::Decoded(summary) = &outcome {
        eprintln!(
            "second render decoded {} samples from {}",
            summary.samples_written, summary.source
        );
    }
    eprintln!("sample[1] now = {:?}", second.get(0, 0, 1));

    Ok(())
}
