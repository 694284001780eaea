//! Unique names for test fixtures.
//!
//! JSON store tests run in parallel inside shared temp directories, so every
//! file name carries a ULID to keep runs isolated.

use ulid::Ulid;

/// Generate a unique string with the given prefix, formatted `{prefix}-{ulid}`.
///
/// ```
/// use whist_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("game");
/// let b = unique_str("game");
/// assert_ne!(a, b);
/// assert!(a.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique JSON file name, formatted `{prefix}-{ulid}.json`.
pub fn unique_json_file(prefix: &str) -> String {
    format!("{}.json", unique_str(prefix))
}
