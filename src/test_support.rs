//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveDate;

use crate::core::state::App;
use crate::core::stats::{CharacterStats, Profile};

/// Shorthand for a known-good calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Default character with the weight changed through `set_weight`.
pub fn stats_with_weight(weight: u32) -> CharacterStats {
    let mut stats = CharacterStats::default();
    stats.set_weight(weight);
    stats
}

/// Creates a test App with the default profile and a visible panel.
pub fn test_app() -> App {
    App::new(Profile::default(), true)
}
