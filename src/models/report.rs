//! Per-case and per-run reports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{CaseIndex, Verdict};

/// What one case wrote and what the checker concluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub index: CaseIndex,
    /// The numeral found in the input file: its first whitespace-delimited token.
    pub numeral: String,
    /// The integer the checker parsed from that text.
    pub value: i64,
    pub verdict: Verdict,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Summary statistics for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub palindromes: usize,
    pub non_palindromes: usize,
}

impl Summary {
    /// Compute summary from a list of case reports.
    pub fn from_cases(cases: &[CaseReport]) -> Self {
        let mut s = Summary::default();
        for case in cases {
            s.total += 1;
            if case.verdict.is_palindrome() {
                s.palindromes += 1;
            } else {
                s.non_palindromes += 1;
            }
        }
        s
    }
}

/// Result of a completed run, in case order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    pub fn summary(&self) -> Summary {
        Summary::from_cases(&self.cases)
    }
}
