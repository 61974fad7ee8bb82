//! Configuration file parsing for `tally.toml`.
//!
//! Searches current directory then ancestors, falling back to
//! `~/.config/tally/tally.toml` if no project-level file is found.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub const CONFIG_FILE: &str = "tally.toml";

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: default_color(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LogSection {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_color() -> bool {
    true
}

fn default_filter() -> String {
    "warn".to_string()
}

impl TallyConfig {
    /// Load the config named by `--config`, or search for one when absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Load config from `tally.toml`, searching current dir then parents.
    /// Returns `Default` when no file is found.
    pub fn load() -> Result<Self, CliError> {
        match Self::find() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file path. The log filter is checked
    /// here so a bad directive fails like any other bad value.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = toml::from_str(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.log_filter(None)?;
        Ok(cfg)
    }

    /// Build the log filter: `env` (the value of `RUST_LOG`) wins over
    /// `[log] filter`.
    pub fn log_filter(&self, env: Option<&str>) -> Result<EnvFilter, CliError> {
        let directive = env.unwrap_or(&self.log.filter);
        EnvFilter::try_new(directive).map_err(|e| CliError::LogFilter {
            filter: directive.to_string(),
            reason: e.to_string(),
        })
    }

    /// Locate the config file that `load` would read.
    pub fn find() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::find_from(&cwd).or_else(|| Self::global_path().filter(|global| global.exists()))
    }

    /// `~/.config/tally/tally.toml`, when a home directory is known.
    pub fn global_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("tally").join(CONFIG_FILE))
    }

    /// Search `start` and its ancestors for `tally.toml`.
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.exists())
    }

    /// Parse a TOML string directly (useful for testing and embedding).
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Write the default template into `dir`, refusing to overwrite.
    pub fn write_template(dir: &Path) -> Result<PathBuf, CliError> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            return Err(CliError::ConfigExists { path });
        }
        std::fs::write(&path, Self::default_template()).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Generate a default `tally.toml` template.
    pub fn default_template() -> &'static str {
        r#"# Tally Configuration

[output]
# "text" or "json"; --json on the command line always wins
format = "text"
# ANSI colors in text output; --no-color turns them off
color = true

[log]
# Filter directive used when RUST_LOG is not set, e.g. "tally_core=trace"
filter = "warn"
"#
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
