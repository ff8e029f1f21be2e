//! Ledger handle for concurrent callers.
//!
//! Every mutation runs under one writer lock, covering the full
//! precondition-check-and-update sequence. After an accepted mutation the
//! writer publishes a fresh [`LedgerSnapshot`] while still holding the lock, so
//! snapshots appear in the same order as the mutations that produced them.
//! Readers only clone the published `Arc` and never wait on the writer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use tally_types::{Candidate, ElectionError, Identity, RegionResult};

use crate::commands::Command;
use crate::events::LedgerEvent;
use crate::ledger::ElectionLedger;
use crate::snapshot::LedgerSnapshot;

#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    writer: Mutex<ElectionLedger>,
    published: RwLock<Arc<LedgerSnapshot>>,
}

impl SharedLedger {
    #[must_use]
    pub fn new(administrator: Identity) -> Self {
        Self::from_ledger(ElectionLedger::new(administrator))
    }

    #[must_use]
    pub fn from_ledger(ledger: ElectionLedger) -> Self {
        let published = RwLock::new(Arc::new(ledger.snapshot()));
        Self {
            inner: Arc::new(Inner {
                writer: Mutex::new(ledger),
                published,
            }),
        }
    }

    pub fn submit_region_result(
        &self,
        caller: &Identity,
        result: RegionResult,
    ) -> Result<LedgerEvent, ElectionError> {
        self.mutate(|ledger| ledger.submit_region_result(caller, result))
    }

    pub fn end_election(&self, caller: &Identity) -> Result<LedgerEvent, ElectionError> {
        self.mutate(|ledger| ledger.end_election(caller))
    }

    pub fn transfer_administration(
        &self,
        caller: &Identity,
        new_administrator: Identity,
    ) -> Result<LedgerEvent, ElectionError> {
        self.mutate(|ledger| ledger.transfer_administration(caller, new_administrator))
    }

    pub fn execute(&self, command: &Command) -> Result<LedgerEvent, ElectionError> {
        self.mutate(|ledger| command.apply(ledger))
    }

    /// The most recently published state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<LedgerSnapshot> {
        let published = self
            .inner
            .published
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&published)
    }

    #[must_use]
    pub fn current_leader(&self) -> Candidate {
        self.snapshot().leader
    }

    #[must_use]
    pub fn election_ended(&self) -> bool {
        self.snapshot().ended
    }

    #[must_use]
    pub fn administrator(&self) -> Identity {
        self.snapshot().administrator.clone()
    }

    /// Copy of the accepted-mutation history. Takes the writer lock.
    #[must_use]
    pub fn history(&self) -> Vec<LedgerEvent> {
        self.writer().history().to_vec()
    }

    fn mutate<F>(&self, op: F) -> Result<LedgerEvent, ElectionError>
    where
        F: FnOnce(&mut ElectionLedger) -> Result<LedgerEvent, ElectionError>,
    {
        let mut ledger = self.writer();
        let event = op(&mut ledger)?;

        let snapshot = Arc::new(ledger.snapshot());
        *self
            .inner
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner) = snapshot;

        Ok(event)
    }

    // Validation runs before any field is touched, so a ledger behind a
    // poisoned lock is still consistent.
    fn writer(&self) -> MutexGuard<'_, ElectionLedger> {
        self.inner
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
