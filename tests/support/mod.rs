#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::{Command, Output};

// Resolves a crate binary built for this test run.
pub fn helper_binary(name: &str) -> PathBuf {
    match name {
        "job-search" => PathBuf::from(env!("CARGO_BIN_EXE_job-search")),
        "catalog-validate" => PathBuf::from(env!("CARGO_BIN_EXE_catalog-validate")),
        other => panic!("unknown helper binary {other}"),
    }
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !output.status.success() {
        bail!(
            "command {:?} failed with {}\nstdout: {}\nstderr: {}",
            cmd.get_program(),
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
