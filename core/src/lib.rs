//! Core domain logic for Tally.
//!
//! This crate owns the election ledger: the state machine that validates
//! regional submissions, keeps running seat totals, tracks the current
//! leader, and locks the outcome once the election ends.
//!
//! ```text
//! Command -> SharedLedger::execute -> ElectionLedger -> LedgerEvent
//!                  |
//!                  v
//!          Arc<LedgerSnapshot> (published after each accepted mutation)
//! ```

mod commands;
mod events;
mod ledger;
mod shared;
mod snapshot;

pub use commands::Command;
pub use events::LedgerEvent;
pub use ledger::ElectionLedger;
pub use shared::SharedLedger;
pub use snapshot::LedgerSnapshot;

pub use tally_types::{
    Candidate, ElectionError, Identity, Phase, RegionName, RegionResult, SeatTally,
};
