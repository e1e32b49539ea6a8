//! Comparison of generated sources against expected fixtures.
//!
//! Both sides are trimmed and stripped of all whitespace, then the expected
//! text must appear somewhere in the generated text. Generated output may
//! contain more than the fixture.

use std::fs;
use std::path::Path;

/// Trim `source` and remove every run of whitespace.
pub fn normalize(source: &str) -> String {
    source.trim().split_whitespace().collect()
}

/// Whether `expected` occurs in `generated` once whitespace is ignored.
pub fn contains_normalized(generated: &str, expected: &str) -> bool {
    normalize(generated).contains(&normalize(expected))
}

/// Assert that `expected` occurs in `generated` once whitespace is ignored.
///
/// # Panics
/// Panics with both normalized forms if the check fails.
pub fn assert_generated_contains(generated: &str, expected: &str) {
    let generated = normalize(generated);
    let expected = normalize(expected);
    assert!(
        generated.contains(&expected),
        "Generated source does not contain expected content.\n  expected: {expected}\n  generated: {generated}"
    );
}

/// Like [`assert_generated_contains`], reading the expected content from a file.
///
/// # Panics
/// Panics if the file cannot be read or the check fails.
pub fn assert_generated_contains_file(generated: &str, expected_file: impl AsRef<Path>) {
    let expected_file = expected_file.as_ref();
    let expected = fs::read_to_string(expected_file)
        .unwrap_or_else(|e| panic!("Could not read expected file {}: {e}", expected_file.display()));
    assert_generated_contains(generated, &expected);
}
