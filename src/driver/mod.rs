//! Case driver: runs the generator and then the checker for each case.
//!
//! [`CaseDriver::run_case`] is the only way to pair the two steps, so a
//! case can never be checked before its input exists. [`CaseDriver::run_all`]
//! walks the cases in order and stops at the first error.

pub mod clean;

pub use clean::{CleanStats, clean};

use std::path::{Path, PathBuf};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::checker;
use crate::config::RunConfig;
use crate::generator;
use crate::models::{CaseError, CaseFiles, CaseIndex, CaseReport, RunReport};

/// Sequential generator/checker driver over a fixed number of cases.
pub struct CaseDriver<R: Rng> {
    dir: PathBuf,
    case_count: usize,
    max_value: u64,
    rng: R,
}

impl CaseDriver<StdRng> {
    /// Build a driver from config, seeding the RNG from `seed` when set.
    pub fn from_config(config: &RunConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> CaseDriver<R> {
    /// Build a driver that draws from `rng`.
    pub fn new(config: &RunConfig, rng: R) -> Self {
        Self {
            dir: config.dir.clone(),
            case_count: config.case_count,
            max_value: config.max_value,
            rng,
        }
    }

    /// Generate and then check a single case.
    pub fn run_case(&mut self, index: CaseIndex) -> Result<CaseReport, CaseError> {
        let files = CaseFiles::new(&self.dir, index);
        let generated = generator::generate(&files, &mut self.rng, self.max_value)?;
        let outcome = checker::check(&files)?;

        tracing::info!(
            case = %index,
            numeral = %generated.numeral,
            verdict = %outcome.verdict,
            "case complete"
        );

        Ok(CaseReport {
            index,
            numeral: generated.numeral,
            value: outcome.value,
            verdict: outcome.verdict,
            input: files.input,
            output: files.output,
        })
    }

    /// Run every case in `0..case_count`, stopping at the first failure.
    pub fn run_all(&mut self) -> Result<RunReport, CaseError> {
        tracing::debug!(
            cases = self.case_count,
            max_value = self.max_value,
            dir = %self.dir.display(),
            "starting run"
        );

        let mut report = RunReport::default();
        for i in 0..self.case_count {
            match self.run_case(CaseIndex(i)) {
                Ok(case) => report.cases.push(case),
                Err(e) => {
                    tracing::error!(case = i, "run aborted: {e}");
                    return Err(e);
                }
            }
        }
        Ok(report)
    }
}

/// Check an existing input file again without regenerating it.
///
/// Fails with [`CaseError::FileNotFound`] when the case was never generated.
pub fn recheck(dir: &Path, index: CaseIndex) -> Result<CaseReport, CaseError> {
    let files = CaseFiles::new(dir, index);
    let outcome = checker::check(&files)?;

    Ok(CaseReport {
        index,
        numeral: checker::leading_token(&outcome.content).to_string(),
        value: outcome.value,
        verdict: outcome.verdict,
        input: files.input,
        output: files.output,
    })
}
