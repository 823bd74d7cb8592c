use imgbridge_frame::{encode_frame, PixelBuffer};

use crate::cmd::{read_frame, write_text, Dimensions, EncodeArgs, Pattern};
use crate::exit::{frame_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::print_raw;

pub fn run(args: EncodeArgs) -> CliResult<i32> {
    let frame = match (&args.input, args.pattern) {
        (Some(path), _) => read_frame(path, args.dims)?,
        (None, Some(pattern)) => generate(pattern, args.dims)?,
        (None, None) => {
            return Err(CliError::new(
                USAGE,
                "either --input or --pattern is required",
            ))
        }
    };

    let payload = encode_frame(&frame);
    tracing::info!(
        header = %frame.header(),
        payload_len = payload.len(),
        "encoded frame"
    );

    match &args.output {
        Some(path) => write_text(path, &payload)?,
        None => {
            print_raw(payload.as_bytes());
            print_raw(b"\n");
        }
    }
    Ok(SUCCESS)
}

pub fn generate(pattern: Pattern, dims: Dimensions) -> CliResult<PixelBuffer> {
    let Dimensions {
        width,
        height,
        channels,
    } = dims;

    let built = match pattern {
        Pattern::Zero => PixelBuffer::new(width, height, channels),
        Pattern::Ramp => PixelBuffer::from_fn(width, height, channels, |channel, _, column| {
            let t = if width > 1 {
                column as f32 / (width - 1) as f32
            } else {
                0.0
            };
            t / (channel + 1) as f32
        }),
        Pattern::Checker => PixelBuffer::from_fn(width, height, channels, |_, row, column| {
            if (row / 8 + column / 8) % 2 == 0 {
                0.0
            } else {
                1.0
            }
        }),
    };
    built.map_err(|err| frame_error("cannot generate frame", err))
}
