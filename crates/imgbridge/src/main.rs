mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "imgbridge",
    version,
    about = "Encode, decode and bridge planar f32 frames as text payloads"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_with_pattern() {
        let cli = Cli::try_parse_from([
            "imgbridge",
            "encode",
            "--width",
            "4",
            "--height",
            "2",
            "--pattern",
            "ramp",
        ])
        .expect("encode args should parse");

        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.dims.channels, 4);
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_input_with_pattern() {
        let err = Cli::try_parse_from([
            "imgbridge",
            "encode",
            "--width",
            "1",
            "--height",
            "1",
            "--input",
            "frame.f32",
            "--pattern",
            "zero",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn encode_requires_a_source() {
        let err = Cli::try_parse_from(["imgbridge", "encode", "--width", "1", "--height", "1"])
            .expect_err("missing source should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_decode_overrides() {
        let cli = Cli::try_parse_from([
            "imgbridge",
            "decode",
            "-",
            "-o",
            "out.f32",
            "--width",
            "8",
        ])
        .expect("decode args should parse");

        match cli.command {
            Command::Decode(args) => {
                assert_eq!(args.width, Some(8));
                assert_eq!(args.height, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "imgbridge",
            "inspect",
            "frame.txt",
            "--strict",
            "--format",
            "json",
            "--log-format",
            "json",
        ])
        .expect("inspect args should parse");

        assert!(matches!(cli.format, Some(OutputFormat::Json)));
        assert!(matches!(cli.log_format, LogFormat::Json));
        assert!(matches!(cli.command, Command::Inspect(ref args) if args.strict));
    }
}
