// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping logical package identifiers back to filesystem directories.
//!
//! Root discovery is split into an environment snapshot ([`RootProbe`])
//! and a pure decision over it ([`resolve_root`]), so the precedence
//! order is testable without mutating process environment.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Error;

/// Where the source tree lives and, under module mode, the module name
/// that package identifiers are prefixed with.
#[derive(Debug, Clone)]
pub struct RootInfo {
    pub root: PathBuf,
    pub module: Option<String>,
}

/// Snapshot of everything root discovery looks at.
#[derive(Debug, Default)]
pub struct RootProbe {
    pub gopath: Option<String>,
    pub module: Option<String>,
    pub cwd: Option<PathBuf>,
    pub home: Option<String>,
}

impl RootProbe {
    /// Capture the process environment and, when GOPATH doesn't settle
    /// the question, probe the toolchain for a declared module.
    pub fn from_env() -> Self {
        let gopath = std::env::var("GOPATH").ok();
        let module = if gopath.is_none() { probe_module() } else { None };
        Self {
            gopath,
            module,
            cwd: std::env::current_dir().ok(),
            home: std::env::var("HOME").ok(),
        }
    }
}

/// Ask the toolchain whether the current directory declares a module.
/// `go list -m` fails outside module mode, which is the signal we want.
fn probe_module() -> Option<String> {
    let output = Command::new("go").args(["list", "-m"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!name.is_empty()).then_some(name)
}

/// Decide the root from a probe. Precedence: explicit GOPATH, then a
/// declared module rooted at the working directory, then `$HOME/go`.
pub fn resolve_root(probe: RootProbe) -> Result<RootInfo, Error> {
    if let Some(gopath) = probe.gopath {
        return Ok(RootInfo { root: PathBuf::from(gopath), module: None });
    }

    if let Some(module) = probe.module {
        let root = probe.cwd.ok_or(Error::NoWorkingDir)?;
        return Ok(RootInfo { root, module: Some(module) });
    }

    let home = probe.home.ok_or(Error::NoRoot)?;
    let gopath = Path::new(&home).join("go");
    if !gopath.join("src").is_dir() {
        return Err(Error::InvalidHomeGopath { path: gopath });
    }
    Ok(RootInfo { root: gopath, module: None })
}

/// Directory believed to hold a package's source and config.
///
/// Classic layout nests packages under `root/src`; module layout strips
/// the module-name prefix from the identifier. Heuristic only: the
/// result is not validated, a bad path just means no config is found
/// and the default threshold applies.
pub fn package_dir(root: &Path, module: Option<&str>, pkg_path: &str) -> PathBuf {
    match module {
        None => root.join("src").join(pkg_path),
        Some(module) => {
            let rel = pkg_path.strip_prefix(module).unwrap_or(pkg_path);
            root.join(rel.trim_start_matches('/'))
        }
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
