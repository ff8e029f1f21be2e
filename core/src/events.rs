use std::fmt;

use serde::{Deserialize, Serialize};

use tally_types::{Candidate, Identity, RegionName};

/// Record of one accepted mutation. Rejected calls never produce an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEvent {
    RegionAccepted {
        region: RegionName,
        winner: Candidate,
        seats: u32,
        /// Leader after this region was counted.
        leader: Candidate,
    },
    ElectionEnded {
        leader: Candidate,
    },
    AdministrationTransferred {
        previous: Identity,
        new: Identity,
    },
}

impl LedgerEvent {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerEvent::RegionAccepted { .. } => "region_accepted",
            LedgerEvent::ElectionEnded { .. } => "election_ended",
            LedgerEvent::AdministrationTransferred { .. } => "administration_transferred",
        }
    }
}

impl fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEvent::RegionAccepted {
                region,
                winner,
                seats,
                leader,
            } => write!(
                f,
                "{} region={region} winner={winner} seats={seats} leader={leader}",
                self.kind()
            ),
            LedgerEvent::ElectionEnded { leader } => {
                write!(f, "{} leader={leader}", self.kind())
            }
            LedgerEvent::AdministrationTransferred { previous, new } => {
                write!(f, "{} previous={previous} new={new}", self.kind())
            }
        }
    }
}
