use imgbridge_bridge::{
    Bridge, BridgeConfig, MemoryFields, Region, RenderOutcome, StaticSource, TextFields,
};
use serde::Serialize;

use crate::cmd::{read_frame, read_payload, write_frame, write_text, RenderArgs};
use crate::exit::{bridge_error, CliResult, SUCCESS};
use crate::output::{or_dash, print_record, OutputFormat, Row};

#[derive(Debug, Default, Serialize)]
struct RenderOutput {
    outcome: &'static str,
    samples_written: Option<usize>,
    clamped: Option<bool>,
    error: Option<String>,
    outbound_len: usize,
    output: Option<String>,
}

pub fn run(args: RenderArgs, format: OutputFormat) -> CliResult<i32> {
    let frame = read_frame(&args.input, args.dims)?;
    let config = match &args.config {
        Some(path) => BridgeConfig::from_json_file(path)
            .map_err(|err| bridge_error(&format!("failed loading {}", path.display()), err))?,
        None => BridgeConfig::default(),
    };

    let mut fields = MemoryFields::new();
    if let Some(path) = &args.inbound {
        fields.set(&config.inbound_field, read_payload(path)?);
    }
    let outbound_field = config.outbound_field.clone();

    let mut bridge = Bridge::with_config(StaticSource::new(frame), fields, config)
        .map_err(|err| bridge_error("invalid bridge config", err))?;
    let region = Region::at_origin(args.dims.width, args.dims.height);
    let (rendered, outcome) = bridge.render_with_outcome(&region);

    let outbound = bridge.fields().read_text(&outbound_field);
    if let Some(path) = &args.outbound {
        write_text(path, &outbound)?;
    }
    if let Some(path) = &args.output {
        write_frame(path, &rendered)?;
    }

    let mut out = describe(&outcome);
    out.outbound_len = outbound.len();
    out.output = args.output.as_ref().map(|path| path.display().to_string());

    let rows: Vec<Row> = vec![
        ("outcome", out.outcome.to_string()),
        ("samples_written", or_dash(out.samples_written)),
        ("clamped", or_dash(out.clamped)),
        ("error", or_dash(out.error.as_deref())),
        ("outbound_len", out.outbound_len.to_string()),
        ("output", or_dash(out.output.as_deref())),
    ];
    print_record(&out, &rows, format);

    Ok(SUCCESS)
}

fn describe(outcome: &RenderOutcome) -> RenderOutput {
    match outcome {
        RenderOutcome::Passthrough => RenderOutput {
            outcome: "passthrough",
            ..RenderOutput::default()
        },
        RenderOutcome::Decoded(summary) => RenderOutput {
            outcome: "decoded",
            samples_written: Some(summary.samples_written),
            clamped: Some(summary.clamped),
            ..RenderOutput::default()
        },
        RenderOutcome::Rejected(err) => RenderOutput {
            outcome: "rejected",
            error: Some(err.to_string()),
            ..RenderOutput::default()
        },
    }
}
