//! Brute-force palindrome checker.
//!
//! Reads the leading integer of a case's input file, reverses its decimal
//! digits arithmetically, and writes `YES` or `NO` to the output file.

use crate::models::{CaseError, CaseFiles, Verdict};

/// What the checker parsed and concluded for one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// The input file content, with invalid UTF-8 replaced by U+FFFD.
    pub content: String,
    pub value: i64,
    pub verdict: Verdict,
}

/// Whether the decimal digits of `n` read the same in both directions.
///
/// Negative values are never palindromes since the sign is not mirrored.
/// The reversal accumulates in a `u64`: a non-negative `i64` has at most
/// 19 digits and every 19-digit reversal is below `u64::MAX`. Overflow in
/// the checked arithmetic would mean "not a palindrome", never a wrap.
pub fn is_palindrome(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let original = n as u64;
    reverse_digits(original) == Some(original)
}

/// Decimal digit reversal of `n`, or `None` if it does not fit a `u64`.
pub fn reverse_digits(mut n: u64) -> Option<u64> {
    let mut reversed: u64 = 0;
    while n != 0 {
        reversed = reversed.checked_mul(10)?.checked_add(n % 10)?;
        n /= 10;
    }
    Some(reversed)
}

/// Parse the leading integer token of `text`.
///
/// Leading whitespace is skipped, an optional `+` or `-` sign is accepted,
/// then at least one ASCII digit must follow. Parsing stops at the first
/// non-digit and the rest of the text is ignored. Returns `None` when there
/// are no digits or the value does not fit an `i64`.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return None;
    }
    trimmed[..sign_len + digit_len].parse().ok()
}

/// The first whitespace-delimited token of `text`, or `""` when blank.
pub fn leading_token(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

/// Test raw input text, as read from an input file.
pub fn verdict_for_text(text: &str) -> Option<(i64, Verdict)> {
    let value = parse_leading_integer(text)?;
    Some((value, Verdict::from(is_palindrome(value))))
}

/// Read the case's input file, test it, and write the verdict file.
pub fn check(files: &CaseFiles) -> Result<CheckOutcome, CaseError> {
    let bytes = std::fs::read(&files.input).map_err(|e| CaseError::FileNotFound {
        path: files.input.clone(),
        source: e,
    })?;
    // Only the leading integer matters; bytes after it may be anything.
    let content = String::from_utf8_lossy(&bytes).into_owned();

    let (value, verdict) = verdict_for_text(&content).ok_or_else(|| CaseError::ParseFailure {
        path: files.input.clone(),
        content: content.clone(),
    })?;

    std::fs::write(&files.output, verdict.as_token()).map_err(|e| {
        CaseError::FileWriteFailure {
            path: files.output.clone(),
            source: e,
        }
    })?;

    tracing::debug!(
        case = %files.index,
        value,
        verdict = %verdict,
        path = %files.output.display(),
        "wrote verdict"
    );

    Ok(CheckOutcome {
        content,
        value,
        verdict,
    })
}
