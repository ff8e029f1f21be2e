//! Running seat totals and election phase.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Candidate;

/// Whether the ledger still accepts mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Open,
    Closed,
}

impl Phase {
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Phase::Closed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Open => "open",
            Phase::Closed => "closed",
        }
    }
}

/// Cumulative seats won by each candidate.
///
/// Totals are `u64` so that summing `u32` region seats cannot overflow in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatTally {
    pub a: u64,
    pub b: u64,
}

impl SeatTally {
    /// Credit `seats` to `candidate`. Seats credited to `Nobody` are dropped.
    pub fn award(&mut self, candidate: Candidate, seats: u32) {
        match candidate {
            Candidate::CandidateA => self.a += u64::from(seats),
            Candidate::CandidateB => self.b += u64::from(seats),
            Candidate::Nobody => {}
        }
    }

    #[must_use]
    pub const fn seats(&self, candidate: Candidate) -> u64 {
        match candidate {
            Candidate::CandidateA => self.a,
            Candidate::CandidateB => self.b,
            Candidate::Nobody => 0,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.a + self.b
    }

    /// The candidate strictly ahead on seats, or `None` when the totals are equal.
    #[must_use]
    pub fn leader_by_seats(&self) -> Option<Candidate> {
        match self.a.cmp(&self.b) {
            Ordering::Greater => Some(Candidate::CandidateA),
            Ordering::Less => Some(Candidate::CandidateB),
            Ordering::Equal => None,
        }
    }
}
