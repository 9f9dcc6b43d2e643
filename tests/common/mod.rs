//! Common test utilities

use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the resistor-bands binary
pub fn resistor_bands_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("resistor-bands");
    path
}

/// Run resistor-bands with the given arguments, color disabled
pub fn run(args: &[&str]) -> Output {
    Command::new(resistor_bands_bin())
        .arg("--no-color")
        .args(args)
        .output()
        .expect("failed to execute resistor-bands")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Run and parse stdout as JSON, asserting success
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run(&full);
    assert!(
        output.status.success(),
        "command failed: {}",
        stderr(&output)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
