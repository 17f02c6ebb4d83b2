//! Replay Navigator - A clean and fast World of Tanks replay manager for the terminal.
//!
//! This library provides the core functionality for replay-navigator, including replay
//! directory scanning, metadata decoding, catalog sorting, version-based cleanup, and
//! replay launching. It is designed to be fast, type-safe, and user-friendly.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Replay directory scanning and per-file decoding
//! - Catalog records, sorting, and the persisted catalog cache
//! - Client version parsing and manifest reading
//! - Launch strategies for Windows and Linux hosts
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Catalog scanning
    decode_replay,
    print_error,
    print_info,
    print_section_header,
    // Output formatting
    print_success,
    // Version comparison
    read_manifest_version,
    scan_replay_directory,
    // Sorting
    sort_records,

    // State management
    CatalogCache,
    GameVersion,
    // Launching
    LaunchStrategy,

    // Error handling
    ReplayNavigatorError,
    ReplayRecord,
    Result,

    // Settings
    Settings,
    SkipReason,
    SortOrder,

    DEFAULT_BOTTLE,
    REPLAY_EXTENSION,
};
