//! Palindrome verdict written to each output file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of the palindrome test for one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The digits read the same in both directions.
    #[serde(rename = "YES")]
    Palindrome,
    /// The value is negative or its digits differ when reversed.
    #[serde(rename = "NO")]
    NotPalindrome,
}

impl Verdict {
    /// Text token written to the output file.
    pub fn as_token(self) -> &'static str {
        match self {
            Verdict::Palindrome => "YES",
            Verdict::NotPalindrome => "NO",
        }
    }

    pub fn is_palindrome(self) -> bool {
        self == Verdict::Palindrome
    }
}

impl From<bool> for Verdict {
    fn from(palindrome: bool) -> Self {
        if palindrome {
            Verdict::Palindrome
        } else {
            Verdict::NotPalindrome
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
