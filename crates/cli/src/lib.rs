// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! covguard library: coverage output parsing, threshold resolution, and
//! per-package verdicts for `go test -cover` runs.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod parser;
pub mod paths;
pub mod runner;
pub mod verdict;
