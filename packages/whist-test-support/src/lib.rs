//! Whist scores test support utilities
//!
//! Shared helpers for the integration tests of the scoring engine: unified
//! logging initialization and unique names for on-disk fixtures.

pub mod logging;
pub mod unique_helpers;
