//! End-to-end walk through a full election

use tally_core::{Candidate, ElectionError, LedgerEvent, RegionResult};

use crate::common::{admin, california, intruder, ledger, ohio};

#[test]
fn full_election_lifecycle() {
    let mut ledger = ledger();
    assert_eq!(ledger.current_leader(), Candidate::Nobody);
    assert!(!ledger.election_ended());

    ledger.submit_region_result(&admin(), california()).unwrap();
    assert_eq!(ledger.current_leader(), Candidate::CandidateA);

    ledger.submit_region_result(&admin(), ohio()).unwrap();
    assert_eq!(ledger.current_leader(), Candidate::CandidateB);

    assert_eq!(
        ledger
            .submit_region_result(&admin(), california())
            .unwrap_err(),
        ElectionError::DuplicateRegion
    );
    assert_eq!(ledger.current_leader(), Candidate::CandidateB);

    assert_eq!(
        ledger
            .submit_region_result(&admin(), RegionResult::new("Texas", 1000, 900, 0))
            .unwrap_err(),
        ElectionError::InvalidSeatCount
    );

    assert_eq!(
        ledger
            .submit_region_result(&intruder(), RegionResult::new("Miami", 2000, 900, 39))
            .unwrap_err(),
        ElectionError::Unauthorized
    );

    assert_eq!(
        ledger
            .submit_region_result(&admin(), RegionResult::new("Texas", 1000, 1000, 32))
            .unwrap_err(),
        ElectionError::TiedRegionVotes
    );

    ledger.end_election(&admin()).unwrap();
    assert!(ledger.election_ended());
    assert_eq!(ledger.current_leader(), Candidate::CandidateB);

    assert_eq!(
        ledger.end_election(&intruder()).unwrap_err(),
        ElectionError::Unauthorized
    );
    assert_eq!(
        ledger.end_election(&admin()).unwrap_err(),
        ElectionError::ElectionAlreadyEnded
    );
    assert_eq!(
        ledger
            .submit_region_result(&admin(), RegionResult::new("Texas", 1000, 900, 32))
            .unwrap_err(),
        ElectionError::ElectionAlreadyEnded
    );

    assert_eq!(ledger.seats(Candidate::CandidateA), 32);
    assert_eq!(ledger.seats(Candidate::CandidateB), 33);
    assert_eq!(
        ledger.history().last(),
        Some(&LedgerEvent::ElectionEnded {
            leader: Candidate::CandidateB
        })
    );
    assert_eq!(ledger.history().len(), 3);
}
