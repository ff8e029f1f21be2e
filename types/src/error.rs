use serde::Serialize;
use thiserror::Error;

/// Why the ledger rejected a call.
///
/// Every rejection leaves the ledger exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectionError {
    #[error("caller is not the administrator")]
    Unauthorized,
    #[error("the election has ended already")]
    ElectionAlreadyEnded,
    #[error("this region result was already submitted")]
    DuplicateRegion,
    #[error("a region must have at least 1 seat")]
    InvalidSeatCount,
    #[error("there cannot be a tie in a region's votes")]
    TiedRegionVotes,
}

impl ElectionError {
    /// Short, stable identifier for the error kind.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::ElectionAlreadyEnded => "election_already_ended",
            Self::DuplicateRegion => "duplicate_region",
            Self::InvalidSeatCount => "invalid_seat_count",
            Self::TiedRegionVotes => "tied_region_votes",
        }
    }
}
