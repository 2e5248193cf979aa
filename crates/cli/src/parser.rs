// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for `go test -cover` text output.
//!
//! The raw format is human-oriented and not a stable contract, so parsing
//! is best-effort: every line classifies into exactly one [`LineKind`],
//! and anything unrecognized is dropped without error.

use std::fmt;

/// Why a coverage percentage is (or isn't) present for a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Tests ran and a percentage was reported.
    Ok,
    /// The package has no test files.
    NoTestFiles,
    /// The package failed to compile.
    BuildFailed,
    /// Tests ran but the package has no executable statements.
    NoStatements,
}

/// One package's coverage outcome.
///
/// `threshold` starts at zero and is assigned exactly once by the verdict
/// engine after config resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRecord {
    /// Logical package identifier as emitted by the tool,
    /// e.g. `github.com/org/repo/pkg/foo`.
    pub path: String,
    pub status: Status,
    /// Percentage of statements covered; meaningful only when `Ok`.
    pub coverage: f64,
    /// Minimum percentage this package must meet.
    pub threshold: f64,
}

impl CoverageRecord {
    fn new(path: String, status: Status, coverage: f64) -> Self {
        Self { path, status, coverage, threshold: 0.0 }
    }

    /// A record fails only when coverage was actually measured and fell
    /// short. Build failures and missing tests are surfaced but never
    /// threshold-failed.
    pub fn failed(&self) -> bool {
        self.status == Status::Ok && self.coverage < self.threshold
    }
}

impl fmt::Display for CoverageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Ok => {
                let marker = if self.failed() { "FAIL" } else { "ok  " };
                write!(
                    f,
                    "{marker}\t{}\tcoverage: {:.1}% (threshold {:.1}%)",
                    self.path, self.coverage, self.threshold
                )
            }
            Status::NoTestFiles => write!(f, "?   \t{}\t[no test files]", self.path),
            Status::BuildFailed => write!(f, "FAIL\t{}\t[build failed]", self.path),
            Status::NoStatements => write!(f, "ok  \t{}\t[no statements]", self.path),
        }
    }
}

/// Total classification of one output line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Covered { path: String, coverage: f64 },
    NoTestFiles { path: String },
    BuildFailed { path: String },
    NoStatements { path: String },
    Unrecognized,
}

/// Classify a single line of `go test -cover` output.
///
/// Recognized shapes (whitespace between fields varies by go version):
///
/// ```text
/// ok    <pkg>  0.005s  coverage: 92.3% of statements
/// ok    <pkg>  0.002s  coverage: [no statements]
/// ?     <pkg>  [no test files]
/// FAIL  <pkg> [build failed]
/// ```
pub fn classify_line(line: &str) -> LineKind {
    let mut fields = line.split_whitespace();
    let (Some(marker), Some(path)) = (fields.next(), fields.next()) else {
        return LineKind::Unrecognized;
    };
    let path = path.to_string();

    match marker {
        "?" if line.contains("[no test files]") => LineKind::NoTestFiles { path },
        "FAIL" if line.contains("[build failed]") => LineKind::BuildFailed { path },
        "ok" if line.contains("coverage: [no statements]") => LineKind::NoStatements { path },
        "ok" => match parse_percentage(line) {
            Some(coverage) => LineKind::Covered { path, coverage },
            None => LineKind::Unrecognized,
        },
        _ => LineKind::Unrecognized,
    }
}

/// Extract `NN.N` from `... coverage: NN.N% of statements ...`.
fn parse_percentage(line: &str) -> Option<f64> {
    let rest = line.split("coverage:").nth(1)?;
    let (percent, _) = rest.split_once("% of statements")?;
    percent.trim().parse().ok()
}

/// Parse full coverage-run output into records, preserving input order.
///
/// Order matters downstream: verdict lines render in package-build order.
pub fn parse(output: &str) -> Vec<CoverageRecord> {
    output
        .lines()
        .filter_map(|line| match classify_line(line) {
            LineKind::Covered { path, coverage } => {
                Some(CoverageRecord::new(path, Status::Ok, coverage))
            }
            LineKind::NoTestFiles { path } => {
                Some(CoverageRecord::new(path, Status::NoTestFiles, 0.0))
            }
            LineKind::BuildFailed { path } => {
                Some(CoverageRecord::new(path, Status::BuildFailed, 0.0))
            }
            LineKind::NoStatements { path } => {
                Some(CoverageRecord::new(path, Status::NoStatements, 0.0))
            }
            LineKind::Unrecognized => None,
        })
        .collect()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
