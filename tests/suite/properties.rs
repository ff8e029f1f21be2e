//! Ledger properties checked over generated submission sequences

use std::collections::HashSet;

use tally_core::{Candidate, ElectionError, LedgerSnapshot, RegionName, RegionResult};

use crate::common::{Lcg, admin, intruder, ledger, seats_in_history};

fn random_result(rng: &mut Lcg) -> RegionResult {
    // Small name space so duplicates happen; small vote range so ties happen.
    let name = format!("region-{}", rng.below(40));
    let votes_a = rng.below(6);
    let votes_b = rng.below(6);
    let seats = u32::try_from(rng.below(5)).unwrap();
    RegionResult::new(name, votes_a, votes_b, seats)
}

#[test]
fn rejected_calls_never_change_state() {
    let mut rng = Lcg::new(7);
    let mut ledger = ledger();

    for _ in 0..500 {
        let before: LedgerSnapshot = ledger.snapshot();
        let caller = if rng.below(10) == 0 { intruder() } else { admin() };
        if ledger
            .submit_region_result(&caller, random_result(&mut rng))
            .is_err()
        {
            assert_eq!(ledger.snapshot(), before);
        }
    }
}

#[test]
fn seat_totals_match_accepted_history() {
    for seed in 1..=20 {
        let mut rng = Lcg::new(seed);
        let mut ledger = ledger();
        let mut expected = 0u64;

        for _ in 0..200 {
            let result = random_result(&mut rng);
            let seats = u64::from(result.seats);
            if ledger.submit_region_result(&admin(), result).is_ok() {
                expected += seats;
            }
        }

        let tally = ledger.seat_tally();
        assert_eq!(tally.total(), expected, "seed {seed}");
        assert_eq!(seats_in_history(ledger.history()), expected, "seed {seed}");

        let unique: HashSet<&RegionName> = ledger.submitted_regions().iter().collect();
        assert_eq!(unique.len(), ledger.submitted_regions().len(), "seed {seed}");
    }
}

#[test]
fn leader_follows_strict_seat_majority_and_ignores_ties() {
    for seed in 1..=20 {
        let mut rng = Lcg::new(seed);
        let mut ledger = ledger();
        let mut expected = Candidate::Nobody;

        for _ in 0..200 {
            if ledger
                .submit_region_result(&admin(), random_result(&mut rng))
                .is_ok()
            {
                let tally = ledger.seat_tally();
                if tally.a > tally.b {
                    expected = Candidate::CandidateA;
                } else if tally.b > tally.a {
                    expected = Candidate::CandidateB;
                }
                assert_eq!(ledger.current_leader(), expected, "seed {seed}");
            }
        }
    }
}

#[test]
fn once_a_candidate_leads_nobody_never_returns() {
    let mut rng = Lcg::new(99);
    let mut ledger = ledger();
    let mut has_led = false;

    for _ in 0..300 {
        let _ = ledger.submit_region_result(&admin(), random_result(&mut rng));
        if ledger.current_leader() != Candidate::Nobody {
            has_led = true;
        }
        if has_led {
            assert_ne!(ledger.current_leader(), Candidate::Nobody);
        }
    }
    assert!(has_led);
}

#[test]
fn non_administrator_is_always_unauthorized() {
    let mut rng = Lcg::new(3);
    let mut ledger = ledger();

    for _ in 0..100 {
        assert_eq!(
            ledger
                .submit_region_result(&intruder(), random_result(&mut rng))
                .unwrap_err(),
            ElectionError::Unauthorized
        );
    }
    ledger.end_election(&admin()).unwrap();
    assert_eq!(
        ledger.end_election(&intruder()).unwrap_err(),
        ElectionError::Unauthorized
    );
}

#[test]
fn closed_ledger_rejects_every_administrator_mutation() {
    let mut rng = Lcg::new(11);
    let mut ledger = ledger();
    for _ in 0..50 {
        let _ = ledger.submit_region_result(&admin(), random_result(&mut rng));
    }
    ledger.end_election(&admin()).unwrap();
    let frozen = ledger.snapshot();

    for _ in 0..100 {
        assert_eq!(
            ledger
                .submit_region_result(&admin(), random_result(&mut rng))
                .unwrap_err(),
            ElectionError::ElectionAlreadyEnded
        );
    }
    assert_eq!(
        ledger.end_election(&admin()).unwrap_err(),
        ElectionError::ElectionAlreadyEnded
    );
    assert_eq!(ledger.snapshot(), frozen);
    assert!(ledger.election_ended());
}
