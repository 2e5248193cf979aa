// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for config file discovery.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use super::*;

#[test]
fn finds_config_in_start_directory() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join(CONFIG_FILE), "threshold = 90.0\n").unwrap();

    let found = find_config(root.path()).unwrap();
    assert_eq!(found, root.path().join(CONFIG_FILE));
}

#[test]
fn finds_config_two_levels_up() {
    let root = tempfile::tempdir().unwrap();
    let deep = root.path().join("pkg/foo");
    fs::create_dir_all(&deep).unwrap();
    fs::write(root.path().join(CONFIG_FILE), "threshold = 90.0\n").unwrap();

    let found = find_config(&deep).unwrap();
    assert_eq!(found, root.path().join(CONFIG_FILE));
}

#[test]
fn nearest_config_wins() {
    let root = tempfile::tempdir().unwrap();
    let deep = root.path().join("pkg/foo");
    fs::create_dir_all(&deep).unwrap();
    fs::write(root.path().join(CONFIG_FILE), "threshold = 90.0\n").unwrap();
    fs::write(deep.join(CONFIG_FILE), "threshold = 50.0\n").unwrap();

    let found = find_config(&deep).unwrap();
    assert_eq!(found, deep.join(CONFIG_FILE));
}

#[test]
fn no_config_anywhere_returns_none() {
    let root = tempfile::tempdir().unwrap();
    let deep = root.path().join("pkg/foo");
    fs::create_dir_all(&deep).unwrap();

    // The walk continues past the tempdir up to the real filesystem
    // root; this only holds while no ancestor carries a .cover.toml.
    assert!(find_config(&deep).is_none());
}

#[test]
fn config_files_yields_nearest_first() {
    let root = tempfile::tempdir().unwrap();
    let deep = root.path().join("pkg/foo");
    fs::create_dir_all(&deep).unwrap();
    fs::write(root.path().join(CONFIG_FILE), "threshold = 90.0\n").unwrap();
    fs::write(deep.join(CONFIG_FILE), "threshold = 50.0\n").unwrap();

    let files: Vec<_> = config_files(&deep).collect();
    assert_eq!(files[0], deep.join(CONFIG_FILE));
    assert_eq!(files[1], root.path().join(CONFIG_FILE));
}

#[test]
fn nonexistent_start_directory_is_not_an_error() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join(CONFIG_FILE), "threshold = 90.0\n").unwrap();

    // Path resolution is heuristic; a package dir that doesn't exist
    // still walks its (existing) ancestors.
    let ghost = root.path().join("does/not/exist");
    let found = find_config(&ghost).unwrap();
    assert_eq!(found, root.path().join(CONFIG_FILE));
}
