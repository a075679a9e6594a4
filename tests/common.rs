use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

pub fn marshrut() -> Command {
    cargo_bin_cmd!("marshrut")
}

#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
