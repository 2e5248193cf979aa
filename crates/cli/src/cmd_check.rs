// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation: run the coverage tests, evaluate every
//! package, print one verdict line per package, and pick the exit code.

use std::process::ExitCode;

use anyhow::Context;

use covguard::cli::Cli;
use covguard::config::DEFAULT_THRESHOLD;
use covguard::parser;
use covguard::paths::{self, RootProbe};
use covguard::runner;
use covguard::verdict::{self, EvalContext};

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    // Both of these are fatal: no partial verdict is ever produced.
    let output =
        runner::run_cover(cli.profile, &cli.packages).context("could not run tests")?;
    let root = paths::resolve_root(RootProbe::from_env())
        .context("could not determine filesystem root")?;

    let records = parser::parse(&output);
    let ctx = EvalContext {
        root: &root.root,
        module: root.module.as_deref(),
        cli_threshold: cli.threshold,
        default_threshold: DEFAULT_THRESHOLD,
    };
    let verdict = verdict::evaluate(records, &ctx);

    for warning in &verdict.warnings {
        eprintln!("warning: {warning}");
    }
    for record in &verdict.records {
        println!("{record}");
    }

    Ok(if verdict.failed { ExitCode::from(1) } else { ExitCode::SUCCESS })
}
