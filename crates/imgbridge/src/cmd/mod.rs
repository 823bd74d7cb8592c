use clap::{Args, Subcommand, ValueEnum};
use imgbridge_frame::PixelBuffer;
use std::path::{Path, PathBuf};

use crate::exit::{frame_error, io_error, CliResult};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod envinfo;
pub mod inspect;
pub mod render;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a raw planar f32 frame into a text payload.
    Encode(EncodeArgs),
    /// Decode a text payload into a raw planar f32 frame.
    Decode(DecodeArgs),
    /// Describe a payload without writing pixels.
    Inspect(InspectArgs),
    /// Run one bridge pass: publish the input frame, apply an inbound payload.
    Render(RenderArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Print build and environment diagnostics.
    Envinfo(EnvinfoArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args),
        Command::Decode(args) => decode::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Render(args) => render::run(args, format),
        Command::Version(args) => version::run(args),
        Command::Envinfo(args) => envinfo::run(args, format),
    }
}

/// Frame dimensions given on the command line.
#[derive(Args, Debug, Clone, Copy)]
pub struct Dimensions {
    /// Frame width in pixels.
    #[arg(long)]
    pub width: usize,
    /// Frame height in pixels.
    #[arg(long)]
    pub height: usize,
    /// Channels per pixel.
    #[arg(long, default_value = "4")]
    pub channels: usize,
}

/// Synthetic frame contents.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Pattern {
    /// Every sample 0.0.
    Zero,
    /// Horizontal 0..1 ramp, divided by channel index + 1.
    Ramp,
    /// 8-pixel checkerboard of 0.0 and 1.0.
    Checker,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub dims: Dimensions,
    /// Raw native-endian planar f32 input file.
    #[arg(long, short = 'i', conflicts_with = "pattern", required_unless_present = "pattern")]
    pub input: Option<PathBuf>,
    /// Generate the frame instead of reading it.
    #[arg(long, conflicts_with = "input")]
    pub pattern: Option<Pattern>,
    /// Write the payload here instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Payload file, or `-` for stdin.
    pub payload: PathBuf,
    /// Raw f32 output file.
    #[arg(long, short = 'o')]
    pub output: PathBuf,
    /// Target width. Default: payload header width.
    #[arg(long)]
    pub width: Option<usize>,
    /// Target height. Default: payload header height.
    #[arg(long)]
    pub height: Option<usize>,
    /// Target channels. Default: payload header channels.
    #[arg(long)]
    pub channels: Option<usize>,
    /// Raw f32 frame to decode over. Default: zero-filled.
    #[arg(long)]
    pub base: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Payload file, or `-` for stdin.
    pub payload: PathBuf,
    /// Exit non-zero unless the data matches the header exactly.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub dims: Dimensions,
    /// Raw native-endian planar f32 upstream frame.
    #[arg(long, short = 'i')]
    pub input: PathBuf,
    /// Inbound payload file to apply.
    #[arg(long)]
    pub inbound: Option<PathBuf>,
    /// Bridge config (JSON).
    #[arg(long, env = "IMGBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,
    /// Write the outbound payload here.
    #[arg(long)]
    pub outbound: Option<PathBuf>,
    /// Write the output frame (raw f32) here.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug, Default)]
pub struct EnvinfoArgs {}

/// Read a text payload from a file or stdin (`-`).
pub fn read_payload(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut text)
            .map_err(|err| io_error("failed reading stdin", err))?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}

/// Payload text with the trailing newline an editor or shell may add removed.
pub fn trim_payload(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}

/// Load a raw native-endian planar f32 frame with the given dimensions.
pub fn read_frame(path: &Path, dims: Dimensions) -> CliResult<PixelBuffer> {
    let bytes = std::fs::read(path)
        .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?;
    PixelBuffer::from_ne_bytes(dims.width, dims.height, dims.channels, &bytes).map_err(|err| {
        frame_error(
            &format!(
                "{} does not hold a {}x{}x{} f32 frame",
                path.display(),
                dims.width,
                dims.height,
                dims.channels
            ),
            err,
        )
    })
}

/// Write a frame as raw native-endian planar f32.
pub fn write_frame(path: &Path, frame: &PixelBuffer) -> CliResult<()> {
    std::fs::write(path, frame.to_ne_bytes())
        .map_err(|err| io_error(&format!("failed writing {}", path.display()), err))
}

pub fn write_text(path: &Path, text: &str) -> CliResult<()> {
    std::fs::write(path, text)
        .map_err(|err| io_error(&format!("failed writing {}", path.display()), err))
}
