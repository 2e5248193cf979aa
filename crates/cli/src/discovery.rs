// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from a package directory up to the filesystem root looking for
//! `.cover.toml` files. Two packages in different subtrees may resolve
//! different configs; that is the point of the hierarchy.

use std::path::{Path, PathBuf};

/// Per-directory threshold config file name.
pub const CONFIG_FILE: &str = ".cover.toml";

/// Existing config files from `start_dir` up to the filesystem root,
/// nearest first.
pub fn config_files(start_dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    start_dir.ancestors().map(|dir| dir.join(CONFIG_FILE)).filter(|path| path.is_file())
}

/// Find the nearest `.cover.toml` at or above `start_dir`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    config_files(start_dir).next()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
