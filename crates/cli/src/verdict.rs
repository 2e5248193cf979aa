// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verdict engine: assign each record its effective threshold and fold
//! per-package failures into one aggregate result.

use std::path::Path;

use crate::config;
use crate::parser::CoverageRecord;
use crate::paths;

/// Inputs shared by every record's evaluation.
#[derive(Debug)]
pub struct EvalContext<'a> {
    pub root: &'a Path,
    pub module: Option<&'a str>,
    /// Explicitly supplied `--threshold` value; `None` means the flag
    /// was absent, not that it equalled the default.
    pub cli_threshold: Option<f64>,
    pub default_threshold: f64,
}

/// Evaluated records in parser order plus the aggregate result.
#[derive(Debug)]
pub struct Verdict {
    pub records: Vec<CoverageRecord>,
    pub failed: bool,
    pub warnings: Vec<String>,
}

/// Resolve each record's threshold and classify it.
///
/// An explicit CLI threshold applies to every package and skips the
/// per-directory config walk entirely. Otherwise each package resolves
/// its own config independently, so packages in different subtrees may
/// get different thresholds.
pub fn evaluate(mut records: Vec<CoverageRecord>, ctx: &EvalContext) -> Verdict {
    let mut warnings = Vec::new();
    let mut failed = false;

    for record in &mut records {
        let discovered = if ctx.cli_threshold.is_some() {
            None
        } else {
            let dir = paths::package_dir(ctx.root, ctx.module, &record.path);
            let resolution = config::resolve(&dir);
            warnings.extend(resolution.warnings);
            resolution.discovered.map(|d| d.config.threshold)
        };

        record.threshold =
            config::effective_threshold(ctx.cli_threshold, discovered, ctx.default_threshold);
        failed |= record.failed();
    }

    Verdict { records, failed, warnings }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
