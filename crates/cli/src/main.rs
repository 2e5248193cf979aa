// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_check;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use covguard::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cmd_check::run(&cli)
}

/// Diagnostics go to stderr; RUST_LOG overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "covguard=debug" } else { "covguard=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
