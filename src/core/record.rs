//! Replay metadata records reduced from the decoder's JSON documents.
//!
//! A decodable `.wotreplay` file yields a battle-start JSON block and, when the
//! battle was recorded to completion, a battle-result block. [`ReplayRecord`]
//! flattens the fields the catalog needs out of those documents; absent fields
//! take defaults so reduction never fails.

use crate::core::version::GameVersion;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::time::SystemTime;

/// Timestamp format the decoder emits (`22.06.2024 18:30:15`).
pub const DECODER_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Timestamp format for catalog display.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Metadata for a single replay file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReplayRecord {
    pub path: PathBuf,
    pub player_name: String,
    pub vehicle: String,
    pub map_name: String,
    pub battle_time: Option<NaiveDateTime>,
    pub server: String,
    /// Normalized dotted version (`"1.19.1.0"`), or `""` when the decoded
    /// text carried no recognizable version.
    pub client_version: String,
    pub is_complete: bool,
    pub damage_dealt: i64,
}

impl ReplayRecord {
    /// Builds a record from the decoder's battle JSON documents.
    ///
    /// `start` is present in every decodable replay; `end` only when the
    /// battle was recorded to completion. Damage is read only for complete
    /// battles, preferring the start block's direct field over the result
    /// block's personal section.
    pub fn from_battle_json(path: PathBuf, start: &Value, end: Option<&Value>) -> Self {
        let is_complete = start.get("battleType").and_then(Value::as_i64) == Some(1);
        let damage_dealt = if is_complete {
            damage_from_battle(start, end)
        } else {
            0
        };

        Self {
            path,
            player_name: string_field(start, "playerName"),
            vehicle: string_field(start, "playerVehicle"),
            map_name: string_field(start, "mapDisplayName"),
            battle_time: parse_battle_time(start),
            server: string_field(start, "serverName"),
            client_version: normalized_version(start),
            is_complete,
            damage_dealt,
        }
    }

    /// Combined vehicle and map description, e.g. `"T-34 on Prokhorovka"`.
    pub fn battle_info(&self) -> String {
        format!("{} on {}", self.vehicle, self.map_name)
    }

    /// Battle timestamp for display, `"unknown"` when undated.
    pub fn formatted_time(&self) -> String {
        self.battle_time
            .map(|time| time.format(DISPLAY_TIME_FORMAT).to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// True when this record's client version is strictly older than
    /// `reference`. Records without a recognizable version never predate
    /// anything, which keeps them out of cleanup.
    pub fn predates(&self, reference: &GameVersion) -> bool {
        match GameVersion::parse(&self.client_version) {
            Some(version) => version < *reference,
            None => false,
        }
    }
}

fn string_field(block: &Value, key: &str) -> String {
    block
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn parse_battle_time(start: &Value) -> Option<NaiveDateTime> {
    let text = start.get("dateTime")?.as_str()?;
    NaiveDateTime::parse_from_str(text, DECODER_TIME_FORMAT).ok()
}

fn normalized_version(start: &Value) -> String {
    start
        .get("clientVersionFromXml")
        .and_then(Value::as_str)
        .and_then(GameVersion::from_marked)
        .map(|version| version.to_string())
        .unwrap_or_default()
}

fn damage_from_battle(start: &Value, end: Option<&Value>) -> i64 {
    if let Some(direct) = start.get("damageDealt").and_then(Value::as_i64) {
        return direct;
    }
    damage_from_results(end).unwrap_or(0)
}

// The result block is an array whose first element carries a "personal" map of
// per-vehicle entries; not every entry has damage (the avatar one does not),
// so take the first that does.
fn damage_from_results(end: Option<&Value>) -> Option<i64> {
    end?.get(0)?
        .get("personal")?
        .as_object()?
        .values()
        .find_map(|entry| entry.get("damageDealt").and_then(Value::as_i64))
}

/// Persisted catalog: the records displayed by the last `list`, in their
/// displayed order.
#[derive(Serialize, Deserialize, Debug)]
pub struct CatalogCache {
    pub records: Vec<ReplayRecord>,
    pub replays_dir: PathBuf,
    pub last_updated: SystemTime,
}

impl CatalogCache {
    pub fn new(records: Vec<ReplayRecord>, replays_dir: PathBuf) -> Self {
        Self {
            records,
            replays_dir,
            last_updated: SystemTime::now(),
        }
    }
}
