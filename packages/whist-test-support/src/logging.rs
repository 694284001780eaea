//! Test logging for the whist scores workspace.
//!
//! Unit tests inside `whist-scores` and the integration tests under
//! `apps/whist-scores/tests` share this one initializer so the subscriber is
//! installed exactly once per test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Default filter when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// Install the test subscriber.
///
/// Idempotent and race-safe. The filter is taken from `TEST_LOG`, then
/// `RUST_LOG`, then [`DEFAULT_TEST_FILTER`]. Output goes through
/// `with_test_writer()` so cargo captures it per test, and timestamps are
/// dropped to keep failures diffable.
///
/// ```bash
/// TEST_LOG=whist_scores=debug cargo test -p whist-scores
/// ```
pub fn init() {
    init_with_default(DEFAULT_TEST_FILTER);
}

/// Same as [`init`] but with a caller-chosen fallback filter.
///
/// Only the first call in a process has any effect.
pub fn init_with_default(fallback: &str) {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(fallback));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init()
            .ok();
    });
}
