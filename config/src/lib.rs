//! Configuration for Tally.
//!
//! Read from `~/.tally/config.toml`, or from the file named by `TALLY_CONFIG`.
//! Every section is optional and a missing file is not an error.
//!
//! ```toml
//! [election]
//! administrator = "${TALLY_ADMIN}"
//!
//! [log]
//! filter = "tally_core=debug,info"
//!
//! [report]
//! path = "~/.tally/report.json"
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use tally_types::Identity;

pub const CONFIG_ENV_VAR: &str = "TALLY_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct TallyConfig {
    pub election: Option<ElectionConfig>,
    pub log: Option<LogConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ElectionConfig {
    /// Identity allowed to submit results and end the election.
    pub administrator: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` takes precedence.
    pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    /// Where to write the JSON report after a run.
    pub path: Option<String>,
}

/// Replace `${VAR}` references with environment values. Unset variables expand to nothing.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Expand a leading `~/` to the home directory.
fn expand_home(value: &str) -> PathBuf {
    match value.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(value),
        },
        None => PathBuf::from(value),
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    let expanded = expand_env_vars(value?);
    let trimmed = expanded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl TallyConfig {
    /// Load from the default location.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Configured administrator, with `${VAR}` references expanded.
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn administrator(&self) -> Option<Identity> {
        let raw = self.election.as_ref()?.administrator.as_ref();
        non_empty(raw).map(Identity::new)
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<String> {
        non_empty(self.log.as_ref()?.filter.as_ref())
    }

    #[must_use]
    pub fn report_path(&self) -> Option<PathBuf> {
        non_empty(self.report.as_ref()?.path.as_ref()).map(|path| expand_home(&path))
    }
}

/// `TALLY_CONFIG` if set, else `~/.tally/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".tally").join("config.toml"))
}
