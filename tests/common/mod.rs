//! Shared test utilities and fixtures

#![allow(dead_code)]

use tally_core::{ElectionLedger, Identity, LedgerEvent, RegionResult};

pub fn admin() -> Identity {
    Identity::from("0xadmin")
}

pub fn intruder() -> Identity {
    Identity::from("0xintruder")
}

pub fn ledger() -> ElectionLedger {
    ElectionLedger::new(admin())
}

pub fn california() -> RegionResult {
    RegionResult::new("California", 1000, 900, 32)
}

pub fn ohio() -> RegionResult {
    RegionResult::new("Ohio", 800, 1200, 33)
}

/// Sum of seats over every `RegionAccepted` event.
pub fn seats_in_history(history: &[LedgerEvent]) -> u64 {
    history
        .iter()
        .map(|event| match event {
            LedgerEvent::RegionAccepted { seats, .. } => u64::from(*seats),
            _ => 0,
        })
        .sum()
}

/// Deterministic pseudo-random sequence (64-bit LCG) for generating submissions.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}
