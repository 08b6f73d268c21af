use std::path::PathBuf;
use std::process::{Command, Output};

fn default_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/default.toml")
}

fn braillec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_braillec"))
        .arg("--config")
        .arg(default_config())
        .args(args)
        .output()
        .expect("run braillec")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn encode_prints_notation_and_glyphs() {
    let output = braillec(&["encode", "Hola"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "46 125 135 123 1\n⠨⠓⠕⠇⠁\n");
}

#[test]
fn encode_json_response() {
    let output = braillec(&["--json", "encode", "Bus 15"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["original_text"], "Bus 15");
    assert_eq!(value["braille_string_repr"], "46|12|136|234|_|3456|1|15");
}

#[test]
fn decode_round_trip() {
    let output = braillec(&["decode", "46 125 135 123 1 _ 3456 1 12 14"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hola 123\n");
}

#[test]
fn invalid_notation_fails_with_message() {
    let output = braillec(&["decode", "17"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid digit '7'"));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let output = Command::new(env!("CARGO_BIN_EXE_braillec"))
        .args(["--config", "/nonexistent/braillec.toml", "mirror", "123"])
        .output()
        .expect("run braillec");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "456\n⠸\n");
}

#[test]
fn skip_override() {
    let output = braillec(&["--fallback", "skip", "--json", "encode", "a€"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["braille_cells"], serde_json::json!([[1]]));
    assert_eq!(value["unmapped"][0]["unit"], "€");
}
