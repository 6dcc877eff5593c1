//! User settings: built-in defaults, optional TOML file, CLI overrides.
//!
//! - `Settings::default()` → auto color, self-test on, 6 decimals
//! - `Settings::from_toml_file(path)` → load user settings
//! - `load(&cli_path)` → explicit `--config` > ~/.qe-solver/config.toml > built-in

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::SolverCli;
use crate::render::{ColorChoice, DEFAULT_PRECISION};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub color: ColorChoice,
    pub self_test: bool,
    /// Decimals printed for each root.
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            self_test: true,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Settings {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// Command-line flags win over file values.
    pub fn with_overrides(mut self, args: &SolverCli) -> Self {
        if let Some(color) = args.color {
            self.color = color;
        }
        if args.skip_self_test {
            self.self_test = false;
        }
        if let Some(p) = args.precision {
            self.precision = p;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.qe-solver\config.toml on Windows; ~/.qe-solver/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".qe-solver").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Resolve and load settings. A broken or missing file only warns; solving
/// never depends on the config being valid.
pub fn load(cli_path: &Option<PathBuf>) -> Settings {
    let Some(path) = resolve_config_path(cli_path) else {
        return Settings::default();
    };
    if !path.exists() {
        if cli_path.is_some() {
            eprintln!("(warn) config path not found: {}", path.display());
        }
        return Settings::default();
    }
    match Settings::from_toml_file(&path) {
        Ok(s) => {
            crate::debug_log!("loaded {}: {s:?}", path.display());
            s
        }
        Err(e) => {
            eprintln!("(warn) failed to load config {}: {e:#}", path.display());
            Settings::default()
        }
    }
}
