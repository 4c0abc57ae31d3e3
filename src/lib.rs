//! palcase — palindrome test-case generator and checker (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod checker;
pub mod config;
pub mod constants;
pub mod driver;
pub mod env;
pub mod generator;
pub mod logging;
pub mod models;
pub mod output;
