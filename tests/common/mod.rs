// Shared test helpers for integration tests.
// Used by cli_test.rs, cli_contract.rs, and cli_flows.rs.
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Stdio};

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_mad-filter"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the filter with the given stdin text.
/// Returns (stdout, stderr, exit_code).
pub fn run_filter(stdin_input: &str) -> (String, String, i32) {
    run_filter_bytes(stdin_input.as_bytes())
}

/// Byte-level variant for inputs that are not valid UTF-8.
pub fn run_filter_bytes(stdin_input: &[u8]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::{ErrorKind, Write};
            let write_result = child.stdin.take().unwrap().write_all(stdin_input);
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Builds a full issue-record document with the given `name` value.
///
/// The other fields carry realistic tracker values so tests exercise the
/// filter against documents shaped like real pipeline input; note the `key`
/// and `summary` fields mention MAD regardless of the name under test.
pub fn record_json(name: serde_json::Value) -> String {
    serde_json::json!({
        "id": "I7d3a09c2",
        "key": "MAD-1042",
        "name": name,
        "project": "platform/media",
        "branch": "master",
        "status": "NEW",
        "summary": "MAD codec negotiation before the first frame"
    })
    .to_string()
}

pub fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}
