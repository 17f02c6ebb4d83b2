//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for fabricating replay records in the shape the decoder
//! produces, so catalog-driven commands can be tested without decodable
//! replay binaries.

#![allow(dead_code)]

use chrono::NaiveDate;
use replay_navigator::core::record::ReplayRecord;
use std::path::Path;

/// A complete battle record as the decoder would produce it
pub fn record(
    path: &Path,
    player: &str,
    vehicle: &str,
    map: &str,
    version: &str,
    damage: i64,
) -> ReplayRecord {
    ReplayRecord {
        path: path.to_path_buf(),
        player_name: player.to_string(),
        vehicle: vehicle.to_string(),
        map_name: map.to_string(),
        battle_time: NaiveDate::from_ymd_opt(2024, 6, 1).and_then(|d| d.and_hms_opt(12, 0, 0)),
        server: "EU1".to_string(),
        client_version: version.to_string(),
        is_complete: true,
        damage_dealt: damage,
    }
}
