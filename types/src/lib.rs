//! Core domain types for Tally.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod candidate;
mod error;
mod ids;
mod region;
mod tally;

pub use candidate::Candidate;
pub use error::ElectionError;
pub use ids::{Identity, RegionName};
pub use region::RegionResult;
pub use tally::{Phase, SeatTally};
