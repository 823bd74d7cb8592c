#![cfg(feature = "cli")]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use imgbridge::frame::{encode_frame, PixelBuffer};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "imgbridge-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn imgbridge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgbridge"))
        .args(["--log-level", "error", "--format", "json"])
        .args(args)
        .output()
        .expect("imgbridge should run")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are utf-8")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be one JSON record")
}

fn sample_frame() -> PixelBuffer {
    PixelBuffer::from_fn(3, 2, 2, |c, y, x| (c * 100 + y * 10 + x) as f32 + 0.25)
        .expect("frame dimensions are small")
}

#[test]
fn encode_inspect_decode_roundtrip() {
    let dir = unique_temp_dir("roundtrip");
    let raw = dir.join("frame.f32");
    let payload = dir.join("frame.txt");
    let decoded = dir.join("decoded.f32");
    let frame = sample_frame();
    std::fs::write(&raw, frame.to_ne_bytes()).expect("frame should be writable");

    let out = imgbridge(&[
        "encode",
        "--width",
        "3",
        "--height",
        "2",
        "--channels",
        "2",
        "-i",
        path_str(&raw),
        "-o",
        path_str(&payload),
    ]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    let text = std::fs::read_to_string(&payload).expect("payload should exist");
    assert!(text.starts_with("3,2,2|"));
    assert_eq!(text, encode_frame(&frame));

    let out = imgbridge(&["inspect", path_str(&payload), "--strict"]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    let report = stdout_json(&out);
    assert_eq!(report["valid"], true);
    assert_eq!(report["complete"], true);
    assert_eq!(report["expected_bytes"], 48);

    let out = imgbridge(&["decode", path_str(&payload), "-o", path_str(&decoded)]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    assert_eq!(stdout_json(&out)["samples_written"], 12);
    let bytes = std::fs::read(&decoded).expect("decoded frame should exist");
    assert_eq!(bytes, frame.to_ne_bytes());
}

#[test]
fn encode_pattern_to_stdout_ends_with_newline() {
    let out = imgbridge(&[
        "encode", "--width", "2", "--height", "1", "--channels", "1", "--pattern", "zero",
    ]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    assert_eq!(String::from_utf8_lossy(&out.stdout), "2,1,1|AAAAAAAAAAA=\n");
}

#[test]
fn decode_into_smaller_target_keeps_top_left() {
    let dir = unique_temp_dir("clamp");
    let payload = dir.join("frame.txt");
    let decoded = dir.join("decoded.f32");
    std::fs::write(&payload, encode_frame(&sample_frame())).expect("payload should be writable");

    let out = imgbridge(&[
        "decode",
        path_str(&payload),
        "-o",
        path_str(&decoded),
        "--width",
        "2",
        "--height",
        "1",
        "--channels",
        "1",
    ]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    let record = stdout_json(&out);
    assert_eq!(record["clamped"], true);
    assert_eq!(record["target"], "2,1,1");

    let bytes = std::fs::read(&decoded).expect("decoded frame should exist");
    let frame = PixelBuffer::from_ne_bytes(2, 1, 1, &bytes).expect("two samples");
    assert_eq!(frame.samples(), &[0.25, 1.25]);
}

#[test]
fn malformed_payload_exits_data_invalid() {
    let dir = unique_temp_dir("malformed");
    let payload = dir.join("bad.txt");
    std::fs::write(&payload, "not a payload").expect("payload should be writable");

    let out = imgbridge(&[
        "decode",
        path_str(&payload),
        "-o",
        path_str(&dir.join("out.f32")),
    ]);
    assert_eq!(out.status.code(), Some(60), "{out:?}");
    assert!(String::from_utf8_lossy(&out.stderr).contains("separator"));
    assert!(!dir.join("out.f32").exists());

    let out = imgbridge(&["inspect", path_str(&payload)]);
    assert_eq!(out.status.code(), Some(60), "{out:?}");
    assert_eq!(stdout_json(&out)["valid"], false);
}

#[test]
fn huge_header_without_dims_exits_data_invalid() {
    let dir = unique_temp_dir("huge-header");
    let payload = dir.join("huge.txt");
    let output = dir.join("out.f32");
    std::fs::write(&payload, "100000,100000,4|AAAAAAAA").expect("payload should be writable");

    let out = imgbridge(&["decode", path_str(&payload), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(60), "{out:?}");
    assert!(String::from_utf8_lossy(&out.stderr).contains("--width"));
    assert!(!output.exists());

    let out = imgbridge(&[
        "decode",
        path_str(&payload),
        "-o",
        path_str(&output),
        "--width",
        "2",
        "--height",
        "1",
        "--channels",
        "1",
    ]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    assert_eq!(stdout_json(&out)["truncated"], true);
}

#[test]
fn strict_inspect_fails_on_short_data() {
    let dir = unique_temp_dir("short");
    let payload = dir.join("short.txt");
    std::fs::write(&payload, "2,2,1|AAAAAAAA\n").expect("payload should be writable");

    let out = imgbridge(&["inspect", path_str(&payload)]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");

    let out = imgbridge(&["inspect", path_str(&payload), "--strict"]);
    assert_eq!(out.status.code(), Some(1), "{out:?}");
    assert_eq!(stdout_json(&out)["complete"], false);
}

#[test]
fn render_publishes_and_applies_inbound() {
    let dir = unique_temp_dir("render");
    let raw = dir.join("frame.f32");
    let inbound = dir.join("inbound.txt");
    let outbound = dir.join("outbound.txt");
    let output = dir.join("output.f32");

    let upstream = sample_frame();
    let replacement = PixelBuffer::filled(3, 2, 2, 7.5).expect("small frame");
    std::fs::write(&raw, upstream.to_ne_bytes()).expect("frame should be writable");
    std::fs::write(&inbound, encode_frame(&replacement)).expect("inbound should be writable");

    let out = imgbridge(&[
        "render",
        "--width",
        "3",
        "--height",
        "2",
        "--channels",
        "2",
        "-i",
        path_str(&raw),
        "--inbound",
        path_str(&inbound),
        "--outbound",
        path_str(&outbound),
        "-o",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    assert_eq!(stdout_json(&out)["outcome"], "decoded");

    let published = std::fs::read_to_string(&outbound).expect("outbound should exist");
    assert_eq!(published, encode_frame(&upstream));
    let bytes = std::fs::read(&output).expect("output should exist");
    assert_eq!(bytes, replacement.to_ne_bytes());
}

#[test]
fn render_rejects_malformed_inbound_and_passes_through() {
    let dir = unique_temp_dir("render-bad");
    let raw = dir.join("frame.f32");
    let inbound = dir.join("inbound.txt");
    let output = dir.join("output.f32");

    let upstream = sample_frame();
    std::fs::write(&raw, upstream.to_ne_bytes()).expect("frame should be writable");
    std::fs::write(&inbound, "3,2|AAAA").expect("inbound should be writable");

    let out = imgbridge(&[
        "render",
        "--width",
        "3",
        "--height",
        "2",
        "--channels",
        "2",
        "-i",
        path_str(&raw),
        "--inbound",
        path_str(&inbound),
        "-o",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    let record = stdout_json(&out);
    assert_eq!(record["outcome"], "rejected");
    assert!(record["error"].is_string());

    let bytes = std::fs::read(&output).expect("output should exist");
    assert_eq!(bytes, upstream.to_ne_bytes());
}

#[test]
fn render_rejects_identical_field_names() {
    let dir = unique_temp_dir("render-same-fields");
    let raw = dir.join("frame.f32");
    let config = dir.join("bridge.json");
    std::fs::write(&raw, sample_frame().to_ne_bytes()).expect("frame should be writable");
    std::fs::write(&config, r#"{"outbound_field": "x", "inbound_field": "x"}"#)
        .expect("config should be writable");

    let out = imgbridge(&[
        "render",
        "--width",
        "3",
        "--height",
        "2",
        "--channels",
        "2",
        "-i",
        path_str(&raw),
        "--config",
        path_str(&config),
    ]);
    assert_eq!(out.status.code(), Some(64), "{out:?}");
}

#[test]
fn render_uses_configured_field_names() {
    let dir = unique_temp_dir("render-custom-fields");
    let raw = dir.join("frame.f32");
    let config = dir.join("bridge.json");
    let inbound = dir.join("inbound.txt");
    let outbound = dir.join("outbound.txt");
    let output = dir.join("output.f32");

    let upstream = sample_frame();
    let replacement = PixelBuffer::filled(3, 2, 2, -2.0).expect("small frame");
    std::fs::write(&raw, upstream.to_ne_bytes()).expect("frame should be writable");
    std::fs::write(&inbound, encode_frame(&replacement)).expect("inbound should be writable");
    std::fs::write(&config, r#"{"outbound_field": "send", "inbound_field": "recv"}"#)
        .expect("config should be writable");

    let out = imgbridge(&[
        "render",
        "--width",
        "3",
        "--height",
        "2",
        "--channels",
        "2",
        "-i",
        path_str(&raw),
        "--config",
        path_str(&config),
        "--inbound",
        path_str(&inbound),
        "--outbound",
        path_str(&outbound),
        "-o",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(0), "{out:?}");
    assert_eq!(stdout_json(&out)["outcome"], "decoded");

    let published = std::fs::read_to_string(&outbound).expect("outbound should exist");
    assert_eq!(published, encode_frame(&upstream));
    let bytes = std::fs::read(&output).expect("output should exist");
    assert_eq!(bytes, replacement.to_ne_bytes());
}

#[test]
fn missing_input_exits_not_found() {
    let dir = unique_temp_dir("missing");
    let out = imgbridge(&[
        "encode",
        "--width",
        "1",
        "--height",
        "1",
        "-i",
        path_str(&dir.join("absent.f32")),
    ]);
    assert_eq!(out.status.code(), Some(66), "{out:?}");
}

#[test]
fn version_names_the_binary() {
    let out = imgbridge(&["version"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("imgbridge "));
}

#[test]
fn extended_version_reports_node_identity() {
    let out = imgbridge(&["version", "--extended"]);
    assert_eq!(out.status.code(), Some(0));
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("node_class: ImageBridge"));
    assert!(text.contains("node_menu: ML/ImageBridge"));
}
