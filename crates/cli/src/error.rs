// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal error taxonomy.
//!
//! These abort the run before any verdict is computed. Recoverable
//! problems (a malformed `.cover.toml`, an unrecognized output line)
//! never surface here; they degrade to warnings or are skipped.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The go toolchain could not be spawned at all.
    #[error("could not invoke the go toolchain")]
    Spawn(#[source] std::io::Error),

    /// `go test` ran but exited non-zero (test failure, compile error, ...).
    /// The captured output is included so the user sees what broke.
    #[error("`go test` exited with {status}:\n{output}")]
    CoverageRun { status: ExitStatus, output: String },

    /// Neither GOPATH, a go module, nor HOME yielded a usable root.
    #[error("no GOPATH or HOME in environment")]
    NoRoot,

    /// `$HOME/go` exists but is not a GOPATH-shaped directory.
    #[error("{} is not a valid GOPATH (missing src directory)", .path.display())]
    InvalidHomeGopath { path: PathBuf },

    /// Module mode needs the working directory to build package paths.
    #[error("working directory unavailable; it is required to resolve package paths under module mode")]
    NoWorkingDir,
}
