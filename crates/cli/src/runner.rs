// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage test subprocess invocation.
//!
//! Runs `go test -cover` over the requested packages and hands the
//! combined stdout/stderr text to the parser. A non-zero exit is a hard
//! failure of the whole run, not a low-coverage failure.

use std::process::Command;

use crate::error::Error;

/// Profile artifact written next to the working directory when
/// `--profile` is set.
pub const PROFILE_FILE: &str = "cover.out";

/// Run `go test -cover ./...` (or the given packages) and return the
/// combined output.
pub fn run_cover(profile: bool, packages: &[String]) -> Result<String, Error> {
    let mut args: Vec<&str> = vec!["test"];
    let cover_flag;
    if profile {
        cover_flag = format!("-coverprofile={PROFILE_FILE}");
        args.push(&cover_flag);
    } else {
        args.push("-cover");
    }

    let packages: Vec<&str> =
        packages.iter().map(String::as_str).filter(|p| !p.is_empty()).collect();
    if packages.is_empty() {
        args.push("./...");
    } else {
        args.extend(packages);
    }

    tracing::debug!("running go {}", args.join(" "));
    let output = Command::new("go").args(&args).output().map_err(Error::Spawn)?;

    // go test interleaves package results across stdout and stderr;
    // the parser wants both.
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(Error::CoverageRun { status: output.status, output: text });
    }
    Ok(text)
}
