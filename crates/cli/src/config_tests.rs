// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for config loading and threshold precedence.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use yare::parameterized;

use super::*;
use crate::discovery::CONFIG_FILE;

#[test]
fn loads_threshold_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "threshold = 72.5\n").unwrap();

    let config = load(&path).unwrap();
    assert!((config.threshold - 72.5).abs() < 1e-9);
}

#[test]
fn load_reports_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "threshold = \"not a number\"\n").unwrap();

    let err = load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("could not parse"));
}

#[test]
fn load_reports_missing_threshold_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "coverage = 90.0\n").unwrap();

    assert!(load(&path).is_err());
}

#[test]
fn resolve_returns_ancestor_config_and_origin() {
    let root = tempfile::tempdir().unwrap();
    let deep = root.path().join("pkg/foo");
    fs::create_dir_all(&deep).unwrap();
    fs::write(root.path().join(CONFIG_FILE), "threshold = 90.0\n").unwrap();

    let resolution = resolve(&deep);
    let discovered = resolution.discovered.unwrap();
    assert!((discovered.config.threshold - 90.0).abs() < 1e-9);
    assert_eq!(discovered.origin, root.path());
    assert!(resolution.warnings.is_empty());
}

#[test]
fn resolve_warns_on_malformed_file_and_keeps_walking() {
    let root = tempfile::tempdir().unwrap();
    let deep = root.path().join("pkg/foo");
    fs::create_dir_all(&deep).unwrap();
    fs::write(root.path().join(CONFIG_FILE), "threshold = 65.0\n").unwrap();
    fs::write(deep.join(CONFIG_FILE), "threshold = oops\n").unwrap();

    let resolution = resolve(&deep);
    let discovered = resolution.discovered.unwrap();
    assert!((discovered.config.threshold - 65.0).abs() < 1e-9);
    assert_eq!(resolution.warnings.len(), 1);
    assert!(resolution.warnings[0].contains("could not parse"));
}

#[parameterized(
    cli_wins_over_all = { Some(75.0), Some(90.0), 75.0 },
    cli_wins_over_default = { Some(75.0), None, 75.0 },
    cli_default_value_still_wins = { Some(80.0), Some(90.0), 80.0 },
    config_wins_over_default = { None, Some(90.0), 90.0 },
    default_when_nothing_else = { None, None, 80.0 },
)]
fn threshold_precedence(cli: Option<f64>, discovered: Option<f64>, expected: f64) {
    let got = effective_threshold(cli, discovered, DEFAULT_THRESHOLD);
    assert!((got - expected).abs() < 1e-9, "got {got}, want {expected}");
}
