//! Core functionality for the replay-navigator tool.
//!
//! This module provides the fundamental building blocks for replay decoding,
//! catalog management, version comparison, launching, and UI output.

pub mod catalog;
pub mod config;
pub mod dirs;
pub mod error;
pub mod launch;
pub mod output;
pub mod record;
pub mod sort;
pub mod version;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{ReplayNavigatorError, Result};

// === Settings ===
// Persisted user configuration: paths and the Bottles prefix name
pub use config::{Settings, DEFAULT_BOTTLE};

// === Catalog scanning ===
// Non-recursive replay directory scan with per-file skip tolerance
pub use catalog::{decode_replay, scan_replay_directory, SkipReason, REPLAY_EXTENSION};

// === Replay records ===
// Decoded replay metadata and the persisted catalog shape
pub use record::{CatalogCache, ReplayRecord, DECODER_TIME_FORMAT, DISPLAY_TIME_FORMAT};

// === Version comparison ===
// Dotted client versions and the version.xml manifest reader
pub use version::{read_manifest_version, GameVersion};

// === Sorting ===
// The closed set of catalog orderings behind `list --sort`
pub use sort::{sort_records, SortOrder};

// === Launching ===
// Platform-specific spawn strategies for the game executable
pub use launch::LaunchStrategy;

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header, print_success};
