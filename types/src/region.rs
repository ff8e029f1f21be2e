//! A single region's pre-tallied result.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{Candidate, RegionName};

/// One region's submission: raw vote counts for both candidates and the
/// number of seats the region awards, winner-take-all.
///
/// No validation happens here. The ledger checks seats and ties at
/// submission time so that it can report rejections in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionResult {
    pub name: RegionName,
    pub votes_a: u64,
    pub votes_b: u64,
    pub seats: u32,
}

impl RegionResult {
    #[must_use]
    pub fn new(name: impl Into<String>, votes_a: u64, votes_b: u64, seats: u32) -> Self {
        Self {
            name: RegionName::new(name),
            votes_a,
            votes_b,
            seats,
        }
    }

    /// The candidate with strictly more votes, or `None` on a raw tie.
    #[must_use]
    pub fn winner(&self) -> Option<Candidate> {
        match self.votes_a.cmp(&self.votes_b) {
            Ordering::Greater => Some(Candidate::CandidateA),
            Ordering::Less => Some(Candidate::CandidateB),
            Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn is_tied(&self) -> bool {
        self.votes_a == self.votes_b
    }
}
