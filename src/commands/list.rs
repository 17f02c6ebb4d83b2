use crate::core::{
    catalog::scan_replay_directory,
    config::Settings,
    dirs::catalog_cache_file,
    error::{ReplayNavigatorError, Result},
    output::{print_info, print_section_header},
    record::{CatalogCache, ReplayRecord},
    sort::{sort_records, SortOrder},
};
use clap::Args;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Catalog ordering
    #[arg(long, value_enum, default_value_t = SortOrder::default())]
    pub sort: SortOrder,

    /// Emit the sorted catalog as JSON instead of the table
    #[arg(long)]
    pub json: bool,
}

pub fn execute_list(args: &ListArgs) -> Result<()> {
    let settings = Settings::load_or_create()?;
    let replays_dir = settings.require_replays_dir()?;

    let mut records = scan_replay_directory(replays_dir);
    sort_records(&mut records, args.sort);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_catalog(&records, replays_dir, args.sort);
    }

    // Launch and cleanup act on this cache, so an empty scan must still
    // replace whatever an earlier list left behind.
    if let Err(e) = save_catalog_cache(&records, replays_dir.to_path_buf()) {
        log::warn!("Catalog cache save failed (list command will continue): {e}");
    }

    Ok(())
}

fn print_catalog(records: &[ReplayRecord], replays_dir: &Path, order: SortOrder) {
    if records.is_empty() {
        print_info(&format!(
            "No replay files found in '{}'.",
            replays_dir.display()
        ));
        return;
    }

    print_section_header(&format!("Replays in {}", replays_dir.display()));

    let widths = ColumnWidths::measure(records);
    for (position, record) in records.iter().enumerate() {
        print_catalog_line(record, position + 1, &widths);
    }

    println!();
    println!(
        "{} {}",
        format!("{} replays", records.len()).white(),
        format!("(sorted by {})", order.label()).bright_black()
    );
    println!();
}

struct ColumnWidths {
    index: usize,
    player: usize,
    vehicle: usize,
    map: usize,
    server: usize,
    version: usize,
}

impl ColumnWidths {
    fn measure(records: &[ReplayRecord]) -> Self {
        Self {
            index: records.len().to_string().chars().count(),
            player: column_width(records, |r| &r.player_name),
            vehicle: column_width(records, |r| &r.vehicle),
            map: column_width(records, |r| &r.map_name),
            server: column_width(records, |r| &r.server),
            version: column_width(records, |r| &r.client_version),
        }
    }
}

fn column_width<F>(records: &[ReplayRecord], field: F) -> usize
where
    F: Fn(&ReplayRecord) -> &str,
{
    records
        .iter()
        .map(|record| field(record).chars().count())
        .max()
        .unwrap_or(0)
}

// Pad before coloring so ANSI escape codes never count toward the width.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(padding))
}

fn print_catalog_line(record: &ReplayRecord, index: usize, widths: &ColumnWidths) {
    let completeness = if record.is_complete {
        "complete".green()
    } else {
        "incomplete".yellow()
    };

    println!(
        "{}{}{} {} {} {} {} {} {} {} {}",
        "[".bright_black(),
        format!("{:>width$}", index, width = widths.index).white(),
        "]".bright_black(),
        pad(&record.player_name, widths.player).white(),
        pad(&record.vehicle, widths.vehicle).blue(),
        pad(&record.map_name, widths.map).white(),
        pad(&record.formatted_time(), 16).white(),
        format!("{:>6} dmg", record.damage_dealt).white(),
        pad(&record.server, widths.server).bright_black(),
        pad(&record.client_version, widths.version).bright_black(),
        completeness,
    );
}

pub fn save_catalog_cache(records: &[ReplayRecord], replays_dir: PathBuf) -> Result<()> {
    log::debug!("Attempting to cache {} replay records", records.len());

    let cache_file = catalog_cache_file(&replays_dir)?;
    log::debug!("Catalog cache file: {}", cache_file.display());

    if let Some(cache_dir) = cache_file.parent() {
        if let Err(e) = fs::create_dir_all(cache_dir) {
            log::error!(
                "Failed to create cache directory '{}': {}",
                cache_dir.display(),
                e
            );
            return Err(ReplayNavigatorError::cache_directory_creation_failed(
                cache_dir, e,
            ));
        }
    }

    let cache = CatalogCache::new(records.to_vec(), replays_dir);

    let json = serde_json::to_string_pretty(&cache).map_err(|e| {
        log::error!("Failed to serialize catalog cache: {e}");
        ReplayNavigatorError::cache_serialization_failed(e)
    })?;

    if let Err(e) = fs::write(&cache_file, json) {
        log::error!(
            "Failed to write cache file '{}': {}",
            cache_file.display(),
            e
        );
        return Err(ReplayNavigatorError::cache_write_failed(&cache_file, e));
    }

    log::debug!("Successfully cached {} replay records", records.len());
    Ok(())
}

pub fn load_catalog_cache(replays_dir: &Path) -> Result<Vec<ReplayRecord>> {
    log::debug!(
        "Attempting to load catalog cache for '{}'",
        replays_dir.display()
    );

    let cache_file = catalog_cache_file(replays_dir)?;
    log::debug!(
        "Looking for cache file: {}, exists = {}",
        cache_file.display(),
        cache_file.exists()
    );

    if !cache_file.exists() {
        return Err(ReplayNavigatorError::cache_file_not_found(&cache_file));
    }

    let content = fs::read_to_string(&cache_file).map_err(|e| {
        log::error!(
            "Failed to read cache file '{}': {}",
            cache_file.display(),
            e
        );
        ReplayNavigatorError::cache_read_failed(&cache_file, e)
    })?;

    let cache: CatalogCache = serde_json::from_str(&content).map_err(|e| {
        log::error!(
            "Failed to parse cache file '{}': {}",
            cache_file.display(),
            e
        );
        ReplayNavigatorError::cache_parse_failed(&cache_file, e)
    })?;

    log::debug!("Loaded {} cached replay records", cache.records.len());

    if cache.records.is_empty() {
        return Err(ReplayNavigatorError::NoCachedReplays);
    }

    Ok(cache.records)
}
