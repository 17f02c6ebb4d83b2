//! Catalog sort orders.
//!
//! Sorting is applied in place to the held record list. All string keys
//! compare case-insensitively; the sort is stable so ties keep their prior
//! relative order and re-sorting by the same key changes nothing.

use crate::core::record::ReplayRecord;
use clap::ValueEnum;

/// The catalog orderings offered by `list --sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    /// Battle time, newest first
    #[default]
    DateNewest,
    /// Battle time, oldest first
    DateOldest,
    /// Player name, A to Z
    Player,
    /// Vehicle, A to Z
    Tank,
    /// Damage dealt, highest first
    Damage,
    /// Map name, A to Z
    Map,
    /// Combined vehicle and map, A to Z
    Info,
}

impl SortOrder {
    /// Human-readable label for the list footer.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::DateNewest => "date, newest first",
            SortOrder::DateOldest => "date, oldest first",
            SortOrder::Player => "player name",
            SortOrder::Tank => "tank",
            SortOrder::Damage => "damage dealt, highest first",
            SortOrder::Map => "map",
            SortOrder::Info => "tank and map",
        }
    }
}

/// Sorts records in place by the chosen order.
pub fn sort_records(records: &mut [ReplayRecord], order: SortOrder) {
    match order {
        SortOrder::DateNewest => records.sort_by(|a, b| b.battle_time.cmp(&a.battle_time)),
        SortOrder::DateOldest => records.sort_by(|a, b| a.battle_time.cmp(&b.battle_time)),
        SortOrder::Player => records.sort_by(|a, b| {
            a.player_name
                .to_lowercase()
                .cmp(&b.player_name.to_lowercase())
        }),
        SortOrder::Tank => {
            records.sort_by(|a, b| a.vehicle.to_lowercase().cmp(&b.vehicle.to_lowercase()))
        }
        SortOrder::Damage => records.sort_by(|a, b| b.damage_dealt.cmp(&a.damage_dealt)),
        SortOrder::Map => {
            records.sort_by(|a, b| a.map_name.to_lowercase().cmp(&b.map_name.to_lowercase()))
        }
        SortOrder::Info => records.sort_by(|a, b| {
            a.battle_info()
                .to_lowercase()
                .cmp(&b.battle_info().to_lowercase())
        }),
    }
}
