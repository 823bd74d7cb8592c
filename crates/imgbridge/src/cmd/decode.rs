use imgbridge_codec::decoded_len_estimate;
use imgbridge_frame::{try_decode_frame, FrameHeader, PixelBuffer};
use serde::Serialize;

use crate::cmd::{read_frame, read_payload, trim_payload, write_frame, DecodeArgs, Dimensions};
use crate::exit::{frame_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_record, OutputFormat, Row};

#[derive(Serialize)]
struct DecodeOutput {
    source: String,
    target: String,
    samples_available: usize,
    samples_written: usize,
    clamped: bool,
    truncated: bool,
    output: String,
}

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let text = read_payload(&args.payload)?;
    let payload = trim_payload(&text);

    let (header, data) =
        FrameHeader::split_payload(payload).map_err(|err| frame_error("malformed payload", err))?;
    let dims = target_dims(&args, header, data)?;

    let mut target = match &args.base {
        Some(path) => read_frame(path, dims)?,
        None => PixelBuffer::new(dims.width, dims.height, dims.channels)
            .map_err(|err| frame_error("invalid target dimensions", err))?,
    };

    let summary = try_decode_frame(payload, &mut target)
        .map_err(|err| frame_error("malformed payload", err))?;
    write_frame(&args.output, &target)?;

    tracing::info!(
        source = %summary.source,
        target = %target.header(),
        written = summary.samples_written,
        "decoded payload"
    );

    let out = DecodeOutput {
        source: summary.source.to_string(),
        target: target.header().to_string(),
        samples_available: summary.samples_available,
        samples_written: summary.samples_written,
        clamped: summary.clamped,
        truncated: summary.truncated,
        output: args.output.display().to_string(),
    };
    let rows: Vec<Row> = vec![
        ("source", out.source.clone()),
        ("target", out.target.clone()),
        ("samples_available", out.samples_available.to_string()),
        ("samples_written", out.samples_written.to_string()),
        ("clamped", out.clamped.to_string()),
        ("truncated", out.truncated.to_string()),
        ("output", out.output.clone()),
    ];
    print_record(&out, &rows, format);

    Ok(SUCCESS)
}

/// Target dimensions: explicit flags win, the rest come from the header.
///
/// Header-derived dimensions are only trusted when the data section could
/// actually fill them, so a forged header cannot force a huge allocation.
fn target_dims(args: &DecodeArgs, header: FrameHeader, data: &str) -> CliResult<Dimensions> {
    let dims = Dimensions {
        width: args.width.unwrap_or(header.width),
        height: args.height.unwrap_or(header.height),
        channels: args.channels.unwrap_or(header.channels),
    };
    if args.width.is_some() && args.height.is_some() && args.channels.is_some() {
        return Ok(dims);
    }

    let available = decoded_len_estimate(data.len());
    match header.byte_len() {
        Some(claimed) if claimed <= available => Ok(dims),
        claimed => Err(CliError::new(
            DATA_INVALID,
            format!(
                "payload header {header} claims {} bytes but the data holds at most {available}; \
                 pass --width, --height and --channels to decode it anyway",
                claimed.map_or_else(|| "too many".to_string(), |n| n.to_string())
            ),
        )),
    }
}
