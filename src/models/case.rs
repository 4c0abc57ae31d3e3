//! Case identity and the file pair each case owns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{CASE_FILE_EXTENSION, INPUT_FILE_PREFIX, OUTPUT_FILE_PREFIX};

/// Index of one generator/checker case within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseIndex(pub usize);

impl CaseIndex {
    /// Even cases get a mirrored numeral and are palindromic by construction.
    pub fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    /// Name of the input file, e.g. `input3.txt`.
    pub fn input_file_name(self) -> String {
        format!("{INPUT_FILE_PREFIX}{}.{CASE_FILE_EXTENSION}", self.0)
    }

    /// Name of the output file, e.g. `output3.txt`.
    pub fn output_file_name(self) -> String {
        format!("{OUTPUT_FILE_PREFIX}{}.{CASE_FILE_EXTENSION}", self.0)
    }

    /// Parse a case file name back into its index.
    ///
    /// Accepts exactly `input{N}.txt` or `output{N}.txt` with a non-empty
    /// run of ASCII digits for `N`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(CASE_FILE_EXTENSION)?.strip_suffix('.')?;
        let digits = stem
            .strip_prefix(INPUT_FILE_PREFIX)
            .or_else(|| stem.strip_prefix(OUTPUT_FILE_PREFIX))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(CaseIndex)
    }
}

impl fmt::Display for CaseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The input and output paths of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFiles {
    pub index: CaseIndex,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl CaseFiles {
    /// Resolve the file pair of `index` inside `dir`.
    pub fn new(dir: &Path, index: CaseIndex) -> Self {
        Self {
            index,
            input: dir.join(index.input_file_name()),
            output: dir.join(index.output_file_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity() {
        assert!(CaseIndex(0).is_even());
        assert!(!CaseIndex(1).is_even());
        assert!(CaseIndex(8).is_even());
    }

    #[test]
    fn file_names_follow_template() {
        assert_eq!(CaseIndex(0).input_file_name(), "input0.txt");
        assert_eq!(CaseIndex(9).output_file_name(), "output9.txt");
        assert_eq!(CaseIndex(12).input_file_name(), "input12.txt");
    }

    #[test]
    fn case_files_join_dir() {
        let files = CaseFiles::new(Path::new("cases"), CaseIndex(4));
        assert_eq!(files.input, PathBuf::from("cases/input4.txt"));
        assert_eq!(files.output, PathBuf::from("cases/output4.txt"));
    }

    #[test]
    fn from_file_name_accepts_case_files() {
        assert_eq!(CaseIndex::from_file_name("input0.txt"), Some(CaseIndex(0)));
        assert_eq!(CaseIndex::from_file_name("output17.txt"), Some(CaseIndex(17)));
    }

    #[test]
    fn from_file_name_rejects_other_files() {
        assert_eq!(CaseIndex::from_file_name("input.txt"), None);
        assert_eq!(CaseIndex::from_file_name("input1.md"), None);
        assert_eq!(CaseIndex::from_file_name("inputx.txt"), None);
        assert_eq!(CaseIndex::from_file_name("input-1.txt"), None);
        assert_eq!(CaseIndex::from_file_name("notes.txt"), None);
        assert_eq!(CaseIndex::from_file_name("input1txt"), None);
    }
}
