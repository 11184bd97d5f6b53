//! Launch configuration: what a JSON file or the CLI may set, and the
//! resolved [`LaunchPlan`] the launcher actually runs.

use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arch::{paths, shell, Platform};
use crate::credentials::SEEDED_ACCOUNTS;

pub const DEFAULT_COUNT: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("count must be between 1 and {max}, got {0}", max = SEEDED_ACCOUNTS)]
    Count(u32),
    #[error("indices {first}..{end} run past the {max} seeded accounts", max = SEEDED_ACCOUNTS)]
    IndexRange { first: u32, end: u64 },
    #[error("{what} may not contain a double quote: {value}")]
    Quote { what: &'static str, value: String },
    #[error("working directory unavailable: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// User-facing settings. Every field is optional; unset fields fall back to
/// environment overrides, PATH lookup, then built-in defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LaunchConfig {
    pub count: Option<u32>,
    pub first_index: Option<u32>,
    pub interpreter: Option<String>,
    pub script: Option<PathBuf>,
    pub terminal: Option<String>,
    pub platform: Option<Platform>,
}

impl LaunchConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layer `over` on top of `self`; fields set in `over` win.
    pub fn merge(self, over: LaunchConfig) -> LaunchConfig {
        LaunchConfig {
            count: over.count.or(self.count),
            first_index: over.first_index.or(self.first_index),
            interpreter: over.interpreter.or(self.interpreter),
            script: over.script.or(self.script),
            terminal: over.terminal.or(self.terminal),
            platform: over.platform.or(self.platform),
        }
    }

    pub fn resolve_in_current_dir(&self) -> Result<LaunchPlan, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        self.resolve(&cwd)
    }

    /// Read every ambient value once and validate the result.
    pub fn resolve(&self, cwd: &Path) -> Result<LaunchPlan, ConfigError> {
        let count = self.count.unwrap_or(DEFAULT_COUNT);
        if count == 0 || count > SEEDED_ACCOUNTS {
            return Err(ConfigError::Count(count));
        }
        let first_index = self.first_index.unwrap_or(0);
        let end = u64::from(first_index) + u64::from(count);
        if end > u64::from(SEEDED_ACCOUNTS) {
            return Err(ConfigError::IndexRange {
                first: first_index,
                end,
            });
        }

        let platform = self.platform.unwrap_or_else(Platform::current);
        let interpreter = shell::interpreter_program(self.interpreter.as_deref(), platform);
        let script = paths::script_path(cwd, self.script.as_deref())
            .to_string_lossy()
            .to_string();
        let terminal = match platform {
            Platform::Posix => Some(shell::terminal_program(self.terminal.as_deref())),
            Platform::Windows => None,
        };

        no_quote("interpreter", &interpreter)?;
        no_quote("script", &script)?;
        if let Some(t) = &terminal {
            no_quote("terminal", t)?;
        }

        tracing::debug!(%platform, %interpreter, %script, ?terminal, "resolved launch plan");

        Ok(LaunchPlan {
            platform,
            interpreter,
            script,
            terminal,
            first_index,
            count,
        })
    }
}

fn no_quote(what: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.contains('"') {
        return Err(ConfigError::Quote {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Fully resolved inputs for one launcher run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPlan {
    pub platform: Platform,
    pub interpreter: String,
    pub script: String,
    /// Terminal emulator; only POSIX launches use one.
    pub terminal: Option<String>,
    pub first_index: u32,
    pub count: u32,
}

impl LaunchPlan {
    pub fn indices(&self) -> Range<u32> {
        self.first_index..self.first_index + self.count
    }
}
