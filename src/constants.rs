//! App-wide constants.
//!
//! Centralises the tool name, config paths, file name templates, defaults
//! and environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "palcase";

/// Crate version from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, exported by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.palcase.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".palcase.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "palcase";

// ── Case files ──────────────────────────────────────────────────────

pub const INPUT_FILE_PREFIX: &str = "input";
pub const OUTPUT_FILE_PREFIX: &str = "output";
pub const CASE_FILE_EXTENSION: &str = "txt";

// ── Defaults ────────────────────────────────────────────────────────

/// Number of cases a run produces when nothing overrides it.
pub const DEFAULT_CASE_COUNT: usize = 10;

/// Exclusive upper bound of the random base value.
pub const DEFAULT_MAX_VALUE: u64 = 20_000;

/// Largest accepted `max_value`. A base below 10^9 has at most nine digits,
/// so its mirrored numeral has at most eighteen and always fits an `i64`.
pub const MAX_VALUE_LIMIT: u64 = 1_000_000_000;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_CASE_COUNT: &str = "PALCASE_CASE_COUNT";
pub const ENV_MAX_VALUE: &str = "PALCASE_MAX_VALUE";
pub const ENV_SEED: &str = "PALCASE_SEED";
pub const ENV_DIR: &str = "PALCASE_DIR";
pub const ENV_LOG: &str = "PALCASE_LOG";
