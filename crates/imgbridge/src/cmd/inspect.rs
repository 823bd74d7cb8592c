use imgbridge_codec::decode;
use imgbridge_frame::{FrameError, FrameHeader};
use serde::Serialize;

use crate::cmd::{read_payload, trim_payload, InspectArgs};
use crate::exit::{CliResult, DATA_INVALID, FAILURE, SUCCESS};
use crate::output::{or_dash, print_record, OutputFormat, Row};

#[derive(Debug, Serialize)]
struct PayloadReport {
    valid: bool,
    complete: bool,
    width: Option<usize>,
    height: Option<usize>,
    channels: Option<usize>,
    base64_len: usize,
    decoded_bytes: usize,
    expected_bytes: Option<usize>,
    error: Option<String>,
}

impl PayloadReport {
    fn rows(&self) -> Vec<Row> {
        vec![
            ("valid", self.valid.to_string()),
            ("complete", self.complete.to_string()),
            ("width", or_dash(self.width)),
            ("height", or_dash(self.height)),
            ("channels", or_dash(self.channels)),
            ("base64_len", self.base64_len.to_string()),
            ("decoded_bytes", self.decoded_bytes.to_string()),
            ("expected_bytes", or_dash(self.expected_bytes)),
            ("error", or_dash(self.error.as_deref())),
        ]
    }
}

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let text = read_payload(&args.payload)?;
    let report = inspect(trim_payload(&text));
    print_record(&report, &report.rows(), format);

    if !report.valid {
        return Ok(DATA_INVALID);
    }
    if args.strict && !report.complete {
        return Ok(FAILURE);
    }
    Ok(SUCCESS)
}

fn inspect(payload: &str) -> PayloadReport {
    let mut report = PayloadReport {
        valid: false,
        complete: false,
        width: None,
        height: None,
        channels: None,
        base64_len: 0,
        decoded_bytes: 0,
        expected_bytes: None,
        error: None,
    };

    let (header, data) = match FrameHeader::split_payload(payload) {
        Ok(parts) => parts,
        Err(err) => {
            report.error = Some(err.to_string());
            return report;
        }
    };
    report.width = Some(header.width);
    report.height = Some(header.height);
    report.channels = Some(header.channels);
    report.expected_bytes = header.byte_len();
    report.base64_len = data.len();
    report.decoded_bytes = decode(data).len();

    if report.decoded_bytes == 0 {
        report.error = Some(FrameError::EmptyPayload.to_string());
        return report;
    }
    report.valid = true;
    report.complete = report.expected_bytes == Some(report.decoded_bytes);
    report
}
