//! TOML command scripts.
//!
//! ```toml
//! administrator = "0xadmin"
//!
//! [[step]]
//! op = "submit"
//! caller = "0xadmin"
//! name = "California"
//! votes_a = 1000
//! votes_b = 900
//! seats = 32
//!
//! [[step]]
//! op = "end"
//! caller = "0xadmin"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tally_core::{Command, ElectionError, Identity, LedgerEvent, SharedLedger};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Administrator for the ledger this script runs against.
    pub administrator: Option<Identity>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Command>,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse script {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Result of one script step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// 1-based position in the script.
    pub step: usize,
    pub op: &'static str,
    pub caller: Identity,
    #[serde(flatten)]
    pub result: StepResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepResult {
    Accepted { event: LedgerEvent },
    Rejected { error: ElectionError },
}

impl StepOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self.result, StepResult::Accepted { .. })
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} {} by {}: ", self.step, self.op, self.caller)?;
        match &self.result {
            StepResult::Accepted { event } => write!(f, "ok {event}"),
            StepResult::Rejected { error } => write!(f, "rejected {}: {error}", error.kind()),
        }
    }
}

/// Execute every step in order. Rejected steps are recorded and the run continues.
pub fn run(ledger: &SharedLedger, script: &Script) -> Vec<StepOutcome> {
    script
        .steps
        .iter()
        .enumerate()
        .map(|(index, command)| {
            let result = match ledger.execute(command) {
                Ok(event) => StepResult::Accepted { event },
                Err(error) => StepResult::Rejected { error },
            };
            StepOutcome {
                step: index + 1,
                op: command.op(),
                caller: command.caller().clone(),
                result,
            }
        })
        .collect()
}
