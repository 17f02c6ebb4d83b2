//! Common assertion helpers for test output validation
//!
//! Provides predicates and assertion utilities for validating replay-navigator
//! command output, error messages, and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for unset-settings guidance messages
pub fn settings_guidance() -> impl Predicate<str> {
    predicates::str::contains("is not configured")
}

/// Creates a predicate that checks for missing-catalog error messages
pub fn catalog_cache_missing() -> impl Predicate<str> {
    predicates::str::contains("No cached replays found")
        .or(predicates::str::contains("Cache file does not exist"))
}

/// Creates a predicate that checks for numbered catalog indices
pub fn has_replay_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Creates a predicate that checks for the empty-directory notice
pub fn no_replays_found() -> impl Predicate<str> {
    predicates::str::contains("No replay files found")
}

/// Creates a predicate that checks for the cleanup success message
pub fn deleted_count(count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Successfully deleted {} old replays.", count))
}
