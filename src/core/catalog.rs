//! Replay directory scanning and per-file decoding.
//!
//! The scan is non-recursive and skip-tolerant: a file the decoder rejects is
//! logged and left out, and a missing directory yields an empty catalog
//! instead of an error.

use crate::core::record::ReplayRecord;
use std::fmt;
use std::path::Path;
use wot_replay_parser::ReplayParser;

/// File extension of replay files, without the dot.
pub const REPLAY_EXTENSION: &str = "wotreplay";

/// Why a candidate file was left out of the catalog.
#[derive(Debug)]
pub enum SkipReason {
    /// The decoder could not parse the file at all.
    Undecodable(String),
    /// The file parsed but carried no battle metadata block.
    NoBattleMetadata(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Undecodable(reason) => write!(f, "undecodable replay: {reason}"),
            SkipReason::NoBattleMetadata(reason) => write!(f, "no battle metadata: {reason}"),
        }
    }
}

/// Decodes a single replay file into a record.
///
/// Decoder errors are opaque; their debug form is carried verbatim in the
/// skip reason.
pub fn decode_replay(path: &Path) -> Result<ReplayRecord, SkipReason> {
    let parser =
        ReplayParser::parse_file(path).map_err(|e| SkipReason::Undecodable(format!("{e:?}")))?;

    let start = parser
        .replay_json_start()
        .map_err(|e| SkipReason::NoBattleMetadata(format!("{e:?}")))?;

    Ok(ReplayRecord::from_battle_json(
        path.to_path_buf(),
        start,
        parser.replay_json_end(),
    ))
}

/// Scans `dir` (non-recursive) for replay files and decodes each one.
///
/// Returns records in no promised order; callers sort. A directory that does
/// not exist or cannot be read yields an empty catalog.
pub fn scan_replay_directory(dir: &Path) -> Vec<ReplayRecord> {
    if !dir.is_dir() {
        log::warn!(
            "Replay directory '{}' does not exist, nothing to scan",
            dir.display()
        );
        return Vec::new();
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Could not read replay directory '{}': {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !is_replay_file(&path) {
            continue;
        }

        log::debug!("Decoding '{}'", path.display());
        match decode_replay(&path) {
            Ok(record) => records.push(record),
            Err(reason) => log::warn!("Skipping '{}': {}", path.display(), reason),
        }
    }

    log::debug!("Found {} replays in '{}'", records.len(), dir.display());
    records
}

fn is_replay_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(REPLAY_EXTENSION)
}
