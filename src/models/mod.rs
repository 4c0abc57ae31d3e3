//! Shared types used across all modules.
//!
//! This module defines case identity, the palindrome verdict, case errors
//! and run reports. The generator, checker and driver import from here
//! rather than reaching into each other's internals.

pub mod case;
pub mod error;
pub mod report;
pub mod verdict;

pub use case::{CaseFiles, CaseIndex};
pub use error::CaseError;
pub use report::{CaseReport, RunReport, Summary};
pub use verdict::Verdict;
