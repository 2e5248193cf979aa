// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use clap::Parser;

/// Fail the build when per-package Go test coverage drops below its
/// threshold
#[derive(Parser)]
#[command(name = "covguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Minimum coverage percentage each package must meet.
    ///
    /// When set it overrides every .cover.toml file (default: 80).
    #[arg(short = 't', long, value_name = "PERCENT")]
    pub threshold: Option<f64>,

    /// Space-separated list of packages to test (default: all packages)
    #[arg(long, value_name = "PKGS", value_delimiter = ' ')]
    pub packages: Vec<String>,

    /// Also write a coverage profile to cover.out in the working
    /// directory
    #[arg(long)]
    pub profile: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
