//! JSON run report.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use tally_core::{LedgerEvent, LedgerSnapshot, SharedLedger};

use crate::script::StepOutcome;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub snapshot: &'a LedgerSnapshot,
    pub history: Vec<LedgerEvent>,
    pub steps: &'a [StepOutcome],
}

impl<'a> Report<'a> {
    pub fn new(ledger: &SharedLedger, snapshot: &'a LedgerSnapshot, steps: &'a [StepOutcome]) -> Self {
        Self {
            snapshot,
            history: ledger.history(),
            steps,
        }
    }

    /// Write the report as pretty JSON, replacing any previous report atomically.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(self).context("failed to serialize report")?;
        bytes.push(b'\n');
        tally_utils::atomic_write(path, &bytes)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), steps = self.steps.len(), "Report written");
        Ok(())
    }
}
