//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ReplayNavigatorError`] which provides comprehensive error
//! handling for all replay-navigator operations. It uses `thiserror` for ergonomic
//! error definitions and includes specialized error constructors for common failure
//! scenarios.
//!
//! # Public API
//! - [`ReplayNavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ReplayNavigatorError>`
//!
//! # Error Categories
//! - **Settings**: Unconfigured paths, each pointing at the flag that fixes it
//! - **Version manifest**: Unreadable or unrecognizable client version
//! - **Launching**: Missing files, bad indices, platform and spawn failures
//! - **Cache operations**: Serialization, file system, missing catalog errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for replay-navigator
#[derive(Error, Debug)]
pub enum ReplayNavigatorError {
    // Settings errors
    #[error("Replay directory is not configured. Run 'replay-navigator settings --replays-dir <path>' first.")]
    ReplaysDirNotSet,

    #[error("Game executable is not configured. Run 'replay-navigator settings --executable <path>' first.")]
    ExecutableNotSet,

    #[error("Version manifest path is not configured. Run 'replay-navigator settings --version-manifest <path>' first.")]
    ManifestPathNotSet,

    #[error("Bottle name is not configured. Run 'replay-navigator settings --bottle <name>' first.")]
    BottleNotSet,

    // Version manifest errors
    #[error("Could not read client version from '{path}': {reason}")]
    VersionManifest { path: PathBuf, reason: String },

    // Replay selection errors
    #[error("Replay file does not exist: {path}. Run 'replay-navigator list' to refresh the catalog.")]
    FileNotFound { path: PathBuf },

    #[error("Index must be positive (got 0)")]
    ZeroIndex,

    #[error("Index {index} is out of range (1-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    // Launch errors
    #[error("Unsupported operating system for replay launch: {os}")]
    UnsupportedPlatform { os: String },

    #[error("bottles-cli not found. Make sure it is installed and in your PATH.")]
    BottlesCliMissing,

    #[error("Failed to launch '{program}': {source}")]
    LaunchFailed {
        program: String,
        source: std::io::Error,
    },

    // Cache errors
    #[error("Failed to create cache directory '{path}': {source}")]
    CacheDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize cache data: {source}")]
    CacheSerializationFailed { source: serde_json::Error },

    #[error("Failed to write cache file '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cache file does not exist at '{path}'. Run 'replay-navigator list' first to build the catalog.")]
    CacheFileNotFound { path: PathBuf },

    #[error("Failed to read cache file '{path}': {source}")]
    CacheReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse cache file '{path}': {source}")]
    CacheParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No cached replays found. Run 'replay-navigator list' first to build the catalog.")]
    NoCachedReplays,

    // Ambient conversions
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using ReplayNavigatorError
pub type Result<T> = std::result::Result<T, ReplayNavigatorError>;

impl ReplayNavigatorError {
    /// Create a version manifest error
    pub fn version_manifest(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::VersionManifest {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    /// Create an unsupported platform error
    pub fn unsupported_platform(os: impl Into<String>) -> Self {
        Self::UnsupportedPlatform { os: os.into() }
    }

    /// Create a launch failed error
    pub fn launch_failed(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::LaunchFailed {
            program: program.into(),
            source,
        }
    }

    /// Create a cache directory creation failed error
    pub fn cache_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache serialization failed error
    pub fn cache_serialization_failed(source: serde_json::Error) -> Self {
        Self::CacheSerializationFailed { source }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache file not found error
    pub fn cache_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::CacheFileNotFound { path: path.into() }
    }

    /// Create a cache read failed error
    pub fn cache_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache parse failed error
    pub fn cache_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CacheParseFailed {
            path: path.into(),
            source,
        }
    }
}
