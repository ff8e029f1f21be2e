//! Concurrent access through `SharedLedger`

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use tally_core::{Command, ElectionError, RegionResult, SharedLedger};

use crate::common::{admin, intruder};

#[test]
fn readers_only_see_consistent_snapshots() {
    let ledger = SharedLedger::new(admin());
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        let writer = ledger.clone();
        let done_ref = &done;
        s.spawn(move || {
            for i in 0..200u64 {
                let (a, b) = if i % 3 == 0 { (1, 2) } else { (2, 1) };
                writer
                    .submit_region_result(&admin(), RegionResult::new(format!("r{i}"), a, b, 1))
                    .unwrap();
            }
            done_ref.store(true, Ordering::Release);
        });

        for _ in 0..2 {
            let reader = ledger.clone();
            let done_ref = &done;
            s.spawn(move || {
                let mut last_seen = 0usize;
                loop {
                    let finished = done_ref.load(Ordering::Acquire);
                    let snapshot = reader.snapshot();
                    // One seat per region, so totals must match the region count exactly.
                    assert_eq!(snapshot.seats.total(), snapshot.regions.len() as u64);
                    assert_eq!(snapshot.events, snapshot.regions.len());
                    assert!(snapshot.regions.len() >= last_seen);
                    last_seen = snapshot.regions.len();
                    if finished {
                        break;
                    }
                }
            });
        }
    });

    assert_eq!(ledger.snapshot().regions.len(), 200);
}

#[test]
fn end_election_races_with_submissions() {
    let ledger = SharedLedger::new(admin());

    let outcomes: Vec<Result<(), ElectionError>> = thread::scope(|s| {
        let mut handles = Vec::new();
        for i in 0..50u32 {
            let ledger = ledger.clone();
            handles.push(s.spawn(move || {
                let command = if i == 25 {
                    Command::end(admin())
                } else {
                    Command::submit(admin(), RegionResult::new(format!("r{i}"), 2, 1, 1))
                };
                ledger.execute(&command).map(|_| ())
            }));
        }
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // Everything either landed before the close or was rejected by it.
    for outcome in &outcomes {
        if let Err(err) = outcome {
            assert_eq!(*err, ElectionError::ElectionAlreadyEnded);
        }
    }

    let snapshot = ledger.snapshot();
    assert!(snapshot.ended);
    let accepted_submissions = outcomes.iter().filter(|o| o.is_ok()).count() - 1;
    assert_eq!(snapshot.regions.len(), accepted_submissions);
    assert_eq!(snapshot.seats.a, accepted_submissions as u64);
}

#[test]
fn unauthorized_callers_cannot_interfere_concurrently() {
    let ledger = SharedLedger::new(admin());

    thread::scope(|s| {
        for i in 0..8u32 {
            let ledger = ledger.clone();
            s.spawn(move || {
                let err = ledger
                    .submit_region_result(&intruder(), RegionResult::new(format!("x{i}"), 5, 1, 3))
                    .unwrap_err();
                assert_eq!(err, ElectionError::Unauthorized);
                assert_eq!(
                    ledger.end_election(&intruder()).unwrap_err(),
                    ElectionError::Unauthorized
                );
            });
        }
    });

    let snapshot = ledger.snapshot();
    assert!(!snapshot.ended);
    assert!(snapshot.regions.is_empty());
    assert_eq!(ledger.administrator(), admin());
}
