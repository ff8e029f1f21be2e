//! Transport-neutral requests against the ledger.
//!
//! A host (RPC server, CLI, script runner) decodes whatever it receives into a
//! [`Command`] and hands it to [`Command::apply`] or
//! [`SharedLedger::execute`](crate::SharedLedger::execute). The caller identity
//! travels inside every command; authenticating it is the host's job.

use serde::{Deserialize, Serialize};

use tally_types::{ElectionError, Identity, RegionName, RegionResult};

use crate::events::LedgerEvent;
use crate::ledger::ElectionLedger;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Submit {
        caller: Identity,
        name: RegionName,
        votes_a: u64,
        votes_b: u64,
        seats: u32,
    },
    End {
        caller: Identity,
    },
    Transfer {
        caller: Identity,
        to: Identity,
    },
}

impl Command {
    #[must_use]
    pub fn submit(caller: Identity, result: RegionResult) -> Self {
        Command::Submit {
            caller,
            name: result.name,
            votes_a: result.votes_a,
            votes_b: result.votes_b,
            seats: result.seats,
        }
    }

    #[must_use]
    pub fn end(caller: Identity) -> Self {
        Command::End { caller }
    }

    #[must_use]
    pub fn caller(&self) -> &Identity {
        match self {
            Command::Submit { caller, .. }
            | Command::End { caller }
            | Command::Transfer { caller, .. } => caller,
        }
    }

    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            Command::Submit { .. } => "submit",
            Command::End { .. } => "end",
            Command::Transfer { .. } => "transfer",
        }
    }

    pub fn apply(&self, ledger: &mut ElectionLedger) -> Result<LedgerEvent, ElectionError> {
        match self {
            Command::Submit {
                caller,
                name,
                votes_a,
                votes_b,
                seats,
            } => ledger.submit_region_result(
                caller,
                RegionResult {
                    name: name.clone(),
                    votes_a: *votes_a,
                    votes_b: *votes_b,
                    seats: *seats,
                },
            ),
            Command::End { caller } => ledger.end_election(caller),
            Command::Transfer { caller, to } => ledger.transfer_administration(caller, to.clone()),
        }
    }
}
