//! Input generation: random numerals, mirrored for even cases.
//!
//! Even case indices write `numeral + reverse(numeral)`, an even-length
//! palindrome by construction (`42` becomes `4224`). Odd indices write the
//! numeral unchanged, palindromic only by chance.

use rand::Rng;

use crate::models::{CaseError, CaseFiles, CaseIndex};

/// What the generator wrote for one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInput {
    /// The random base value the numeral was built from.
    pub base: u64,
    /// The text written to the input file.
    pub numeral: String,
}

/// Character reversal of `text`.
pub fn mirror_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Build the numeral a case writes for a given base value.
pub fn numeral_for_case(index: CaseIndex, base: u64) -> String {
    let numeral = base.to_string();
    if index.is_even() {
        let mirrored = mirror_text(&numeral);
        numeral + &mirrored
    } else {
        numeral
    }
}

/// Draw a base value uniformly from `[0, max_value)`.
///
/// `max_value` must be non-zero; the config layer rejects zero before a run
/// starts.
pub fn draw_base<R: Rng + ?Sized>(rng: &mut R, max_value: u64) -> u64 {
    rng.gen_range(0..max_value)
}

/// Write `numeral` verbatim to the case's input file, replacing any old one.
pub fn write_input(files: &CaseFiles, numeral: &str) -> Result<(), CaseError> {
    std::fs::write(&files.input, numeral).map_err(|e| CaseError::FileWriteFailure {
        path: files.input.clone(),
        source: e,
    })
}

/// Generate the input file for one case.
pub fn generate<R: Rng + ?Sized>(
    files: &CaseFiles,
    rng: &mut R,
    max_value: u64,
) -> Result<GeneratedInput, CaseError> {
    let base = draw_base(rng, max_value);
    let numeral = numeral_for_case(files.index, base);
    write_input(files, &numeral)?;

    tracing::debug!(
        case = %files.index,
        base,
        numeral = %numeral,
        path = %files.input.display(),
        "wrote input"
    );

    Ok(GeneratedInput { base, numeral })
}
