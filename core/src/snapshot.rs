//! Immutable point-in-time view of a ledger.

use serde::Serialize;

use tally_types::{Candidate, Identity, Phase, RegionName, SeatTally};

use crate::ledger::ElectionLedger;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSnapshot {
    pub administrator: Identity,
    pub phase: Phase,
    pub ended: bool,
    pub leader: Candidate,
    pub seats: SeatTally,
    /// Accepted regions, oldest first.
    pub regions: Vec<RegionName>,
    /// Number of accepted mutations so far.
    pub events: usize,
}

impl LedgerSnapshot {
    #[must_use]
    pub fn capture(ledger: &ElectionLedger) -> Self {
        Self {
            administrator: ledger.administrator().clone(),
            phase: ledger.phase(),
            ended: ledger.election_ended(),
            leader: ledger.current_leader(),
            seats: ledger.seat_tally(),
            regions: ledger.submitted_regions().to_vec(),
            events: ledger.history().len(),
        }
    }
}
