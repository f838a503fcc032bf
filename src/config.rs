use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `~/.qvantum/config.toml` (or `--config FILE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Fixed RNG seed for measurements; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Shots sampled when `run --shots` is given without a value override.
    pub shots: usize,
    /// Print the outcome probability table after a run.
    pub show_probabilities: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: None, shots: 1024, show_probabilities: false }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.qvantum\config.toml on Windows; ~/.qvantum/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".qvantum").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load the config at `path`. A missing default file yields defaults; a missing explicit
/// file or a malformed one is an error.
pub fn load_config(path: Option<&Path>, explicit: bool) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    if !path.exists() && !explicit {
        return Ok(SimConfig::default());
    }
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Read config {}", path.display()))?;
    toml::from_str(&src).with_context(|| format!("Parse config {}", path.display()))
}
