// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold configuration: `.cover.toml` loading and precedence.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::discovery;

/// Threshold applied when neither a CLI flag nor a config file says
/// otherwise.
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Contents of a `.cover.toml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdConfig {
    /// Minimum coverage percentage (0-100).
    pub threshold: f64,
}

/// Parse a single config file.
pub fn load(path: &Path) -> anyhow::Result<ThresholdConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("could not parse {}", path.display()))
}

/// A config found during the ancestor walk, with the directory it came
/// from.
#[derive(Debug, Clone)]
pub struct Discovered {
    pub config: ThresholdConfig,
    pub origin: PathBuf,
}

/// Outcome of one ancestor walk. A malformed file is reported as a
/// warning and treated as not found; the walk continues upward so a
/// valid ancestor config can still apply.
#[derive(Debug)]
pub struct Resolution {
    pub discovered: Option<Discovered>,
    pub warnings: Vec<String>,
}

/// Resolve the nearest parseable config at or above `start_dir`.
pub fn resolve(start_dir: &Path) -> Resolution {
    let mut warnings = Vec::new();
    for path in discovery::config_files(start_dir) {
        match load(&path) {
            Ok(config) => {
                tracing::debug!("using {} for {}", path.display(), start_dir.display());
                let origin = path.parent().map_or_else(PathBuf::new, Path::to_path_buf);
                return Resolution { discovered: Some(Discovered { config, origin }), warnings };
            }
            Err(err) => warnings.push(format!("{err:#}")),
        }
    }
    Resolution { discovered: None, warnings }
}

/// Precedence: an explicitly supplied CLI threshold wins, then a
/// discovered config, then the default. Explicit-set is tracked by
/// presence, so passing the default value on the command line still
/// counts as an override.
pub fn effective_threshold(cli: Option<f64>, discovered: Option<f64>, default: f64) -> f64 {
    cli.or(discovered).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
