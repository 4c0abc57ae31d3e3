//! Integration tests for the run, case, check and clean commands.
//!
//! These tests exercise the library functions that back each command,
//! using the public API from the palcase crate.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use palcase::checker;
use palcase::config::RunConfig;
use palcase::driver::{self, CaseDriver};
use palcase::generator;
use palcase::models::{CaseError, CaseFiles, CaseIndex, Verdict};

fn run_config(dir: &Path, seed: u64) -> RunConfig {
    RunConfig {
        seed: Some(seed),
        dir: dir.to_path_buf(),
        ..RunConfig::default()
    }
}

fn read(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name)).unwrap()
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn default_run_writes_ten_case_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let report = CaseDriver::from_config(&run_config(dir.path(), 2024))
        .run_all()
        .unwrap();

    assert_eq!(report.cases.len(), 10);
    for i in 0..10 {
        assert!(dir.path().join(format!("input{i}.txt")).is_file());
        let output = read(dir.path(), &format!("output{i}.txt"));
        assert!(output == "YES" || output == "NO", "got {output:?}");
    }
}

#[test]
fn even_inputs_read_the_same_reversed() {
    let dir = tempfile::tempdir().unwrap();
    CaseDriver::from_config(&run_config(dir.path(), 77))
        .run_all()
        .unwrap();

    for i in (0..10).step_by(2) {
        let digits = read(dir.path(), &format!("input{i}.txt"));
        let reversed: String = digits.chars().rev().collect();
        assert_eq!(digits, reversed, "input{i}.txt");
        assert_eq!(read(dir.path(), &format!("output{i}.txt")), "YES");
    }
}

#[test]
fn odd_inputs_are_plain_numerals_below_bound() {
    let dir = tempfile::tempdir().unwrap();
    CaseDriver::from_config(&run_config(dir.path(), 3))
        .run_all()
        .unwrap();

    for i in (1..10).step_by(2) {
        let numeral = read(dir.path(), &format!("input{i}.txt"));
        let value: u64 = numeral.parse().unwrap();
        assert!(value < 20_000);
        assert_eq!(numeral, value.to_string(), "no leading zeros or sign");
    }
}

#[test]
fn generated_value_survives_the_file_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(10);

    for i in 0..10 {
        let files = CaseFiles::new(dir.path(), CaseIndex(i));
        let generated = generator::generate(&files, &mut rng, 20_000).unwrap();
        let outcome = checker::check(&files).unwrap();
        assert_eq!(outcome.value, generated.numeral.parse::<i64>().unwrap());
    }
}

// ---------------------------------------------------------------------------
// concrete scenarios
// ---------------------------------------------------------------------------

fn check_text(text: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("input0.txt"), text).unwrap();
    driver::recheck(dir.path(), CaseIndex(0)).unwrap();
    read(dir.path(), "output0.txt")
}

#[test]
fn scenario_121_is_yes() {
    assert_eq!(check_text("121"), "YES");
}

#[test]
fn scenario_123_is_no() {
    assert_eq!(check_text("123"), "NO");
}

#[test]
fn scenario_negative_is_no() {
    assert_eq!(check_text("-5"), "NO");
}

#[test]
fn scenario_even_case_base_42() {
    let dir = tempfile::tempdir().unwrap();
    let files = CaseFiles::new(dir.path(), CaseIndex(0));

    generator::write_input(&files, &generator::numeral_for_case(CaseIndex(0), 42)).unwrap();
    let outcome = checker::check(&files).unwrap();

    assert_eq!(read(dir.path(), "input0.txt"), "4224");
    assert_eq!(outcome.verdict, Verdict::Palindrome);
    assert_eq!(read(dir.path(), "output0.txt"), "YES");
}

#[test]
fn scenario_odd_case_base_53() {
    let dir = tempfile::tempdir().unwrap();
    let files = CaseFiles::new(dir.path(), CaseIndex(1));

    generator::write_input(&files, &generator::numeral_for_case(CaseIndex(1), 53)).unwrap();
    let outcome = checker::check(&files).unwrap();

    assert_eq!(read(dir.path(), "input1.txt"), "53");
    assert_eq!(outcome.verdict, Verdict::NotPalindrome);
    assert_eq!(read(dir.path(), "output1.txt"), "NO");
}

// ---------------------------------------------------------------------------
// case / check
// ---------------------------------------------------------------------------

#[test]
fn single_case_writes_only_its_pair() {
    let dir = tempfile::tempdir().unwrap();
    let report = CaseDriver::from_config(&run_config(dir.path(), 1))
        .run_case(CaseIndex(7))
        .unwrap();

    assert_eq!(report.index, CaseIndex(7));
    let mut names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["input7.txt", "output7.txt"]);
}

#[test]
fn check_before_generate_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = driver::recheck(dir.path(), CaseIndex(4)).unwrap_err();
    assert!(matches!(err, CaseError::FileNotFound { .. }));
    assert!(err.to_string().contains("input4.txt"));
}

#[test]
fn check_trailing_content_is_ignored() {
    assert_eq!(check_text("  1221 and then some"), "YES");
}

// ---------------------------------------------------------------------------
// clean
// ---------------------------------------------------------------------------

#[test]
fn clean_removes_a_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("README"), "keep").unwrap();
    CaseDriver::from_config(&run_config(dir.path(), 5))
        .run_all()
        .unwrap();

    let stats = driver::clean(dir.path()).unwrap();

    assert_eq!(stats.files, 20);
    assert!(stats.total_bytes > 0);
    let left: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(left.len(), 1);
}
