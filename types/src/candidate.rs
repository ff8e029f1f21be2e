use std::fmt;

use serde::{Deserialize, Serialize};

/// A contender for the overall lead.
///
/// `Nobody` is the initial leader. Once either candidate has led, the ledger
/// never hands the lead back to `Nobody`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Candidate {
    #[default]
    Nobody,
    CandidateA,
    CandidateB,
}

impl Candidate {
    /// Stable numeric code (0 = nobody).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Candidate::Nobody => 0,
            Candidate::CandidateA => 1,
            Candidate::CandidateB => 2,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Candidate::Nobody),
            1 => Some(Candidate::CandidateA),
            2 => Some(Candidate::CandidateB),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Candidate::Nobody => "nobody",
            Candidate::CandidateA => "candidate_a",
            Candidate::CandidateB => "candidate_b",
        }
    }

    /// Parse a candidate from its string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nobody" | "none" => Some(Candidate::Nobody),
            "candidate_a" | "a" => Some(Candidate::CandidateA),
            "candidate_b" | "b" => Some(Candidate::CandidateB),
            _ => None,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
