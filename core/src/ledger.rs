//! The election ledger state machine.
//!
//! # Lifecycle
//!
//! ```text
//! Open --end_election--> Closed
//! ```
//!
//! While `Open`, the administrator may submit region results and end the
//! election. Once `Closed`, every mutating call fails with
//! [`ElectionError::ElectionAlreadyEnded`] and the ledger is read-only forever.
//!
//! # Leader rule
//!
//! After each accepted submission the leader becomes whichever candidate holds
//! strictly more seats. Equal totals leave the previous leader in place, which
//! may still be `Nobody` if no candidate has ever led.

use std::collections::HashSet;

use tracing::{debug, info};

use tally_types::{
    Candidate, ElectionError, Identity, Phase, RegionName, RegionResult, SeatTally,
};

use crate::events::LedgerEvent;
use crate::snapshot::LedgerSnapshot;

#[derive(Debug, Clone)]
pub struct ElectionLedger {
    administrator: Identity,
    submitted: HashSet<RegionName>,
    /// Accepted regions in acceptance order. Mirrors `submitted`.
    regions: Vec<RegionName>,
    tally: SeatTally,
    leader: Candidate,
    phase: Phase,
    history: Vec<LedgerEvent>,
}

impl ElectionLedger {
    #[must_use]
    pub fn new(administrator: Identity) -> Self {
        Self {
            administrator,
            submitted: HashSet::new(),
            regions: Vec::new(),
            tally: SeatTally::default(),
            leader: Candidate::Nobody,
            phase: Phase::Open,
            history: Vec::new(),
        }
    }

    /// Record one region's result.
    ///
    /// Preconditions are checked in a fixed order and the first failure wins:
    /// administrator, open election, unseen region, at least one seat, no tie.
    /// A rejected call changes nothing.
    pub fn submit_region_result(
        &mut self,
        caller: &Identity,
        result: RegionResult,
    ) -> Result<LedgerEvent, ElectionError> {
        let winner = self
            .check_submission(caller, &result)
            .map_err(|err| rejected("submit_region_result", caller, err))?;

        self.tally.award(winner, result.seats);
        if let Some(leader) = self.tally.leader_by_seats() {
            self.leader = leader;
        }
        self.submitted.insert(result.name.clone());
        self.regions.push(result.name.clone());

        info!(
            region = %result.name,
            winner = %winner,
            seats = result.seats,
            leader = %self.leader,
            seats_a = self.tally.a,
            seats_b = self.tally.b,
            "Region result accepted"
        );

        Ok(self.record(LedgerEvent::RegionAccepted {
            region: result.name,
            winner,
            seats: result.seats,
            leader: self.leader,
        }))
    }

    /// Close the election. Irreversible.
    pub fn end_election(&mut self, caller: &Identity) -> Result<LedgerEvent, ElectionError> {
        self.ensure_administrator(caller)
            .and_then(|()| self.ensure_open())
            .map_err(|err| rejected("end_election", caller, err))?;

        self.phase = Phase::Closed;
        info!(leader = %self.leader, regions = self.regions.len(), "Election ended");

        Ok(self.record(LedgerEvent::ElectionEnded {
            leader: self.leader,
        }))
    }

    /// Hand the administrator role to another identity.
    ///
    /// Only the current administrator may do this, and only while the
    /// election is open.
    pub fn transfer_administration(
        &mut self,
        caller: &Identity,
        new_administrator: Identity,
    ) -> Result<LedgerEvent, ElectionError> {
        self.ensure_administrator(caller)
            .and_then(|()| self.ensure_open())
            .map_err(|err| rejected("transfer_administration", caller, err))?;

        let previous = std::mem::replace(&mut self.administrator, new_administrator.clone());
        info!(previous = %previous, new = %new_administrator, "Administration transferred");

        Ok(self.record(LedgerEvent::AdministrationTransferred {
            previous,
            new: new_administrator,
        }))
    }

    #[must_use]
    pub fn current_leader(&self) -> Candidate {
        self.leader
    }

    #[must_use]
    pub fn election_ended(&self) -> bool {
        self.phase.is_closed()
    }

    #[must_use]
    pub fn administrator(&self) -> &Identity {
        &self.administrator
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn seats(&self, candidate: Candidate) -> u64 {
        self.tally.seats(candidate)
    }

    #[must_use]
    pub fn seat_tally(&self) -> SeatTally {
        self.tally
    }

    #[must_use]
    pub fn is_region_submitted(&self, name: &RegionName) -> bool {
        self.submitted.contains(name)
    }

    /// Accepted regions, oldest first.
    #[must_use]
    pub fn submitted_regions(&self) -> &[RegionName] {
        &self.regions
    }

    /// Every accepted mutation, oldest first.
    #[must_use]
    pub fn history(&self) -> &[LedgerEvent] {
        &self.history
    }

    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::capture(self)
    }

    fn check_submission(
        &self,
        caller: &Identity,
        result: &RegionResult,
    ) -> Result<Candidate, ElectionError> {
        self.ensure_administrator(caller)?;
        self.ensure_open()?;
        if self.submitted.contains(&result.name) {
            return Err(ElectionError::DuplicateRegion);
        }
        if result.seats < 1 {
            return Err(ElectionError::InvalidSeatCount);
        }
        result.winner().ok_or(ElectionError::TiedRegionVotes)
    }

    fn ensure_administrator(&self, caller: &Identity) -> Result<(), ElectionError> {
        if *caller == self.administrator {
            Ok(())
        } else {
            Err(ElectionError::Unauthorized)
        }
    }

    fn ensure_open(&self) -> Result<(), ElectionError> {
        if self.phase.is_closed() {
            Err(ElectionError::ElectionAlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn record(&mut self, event: LedgerEvent) -> LedgerEvent {
        self.history.push(event.clone());
        event
    }
}

fn rejected(op: &'static str, caller: &Identity, err: ElectionError) -> ElectionError {
    debug!(op, caller = %caller, kind = err.kind(), "Ledger call rejected: {err}");
    err
}
