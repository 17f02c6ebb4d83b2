use crate::commands::list::{load_catalog_cache, save_catalog_cache};
use crate::core::{
    catalog::scan_replay_directory,
    config::Settings,
    error::Result,
    output::{print_info, print_success},
    record::ReplayRecord,
    sort::{sort_records, SortOrder},
    version::read_manifest_version,
};
use clap::Args;
use colored::*;
use std::io::{self, Write};
use std::path::Path;

#[derive(Args, Debug)]
pub struct CleanupArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub fn execute_cleanup(args: &CleanupArgs) -> Result<()> {
    let settings = Settings::load_or_create()?;
    let replays_dir = settings.require_replays_dir()?;
    let manifest_path = settings.require_manifest_path()?;

    let installed = read_manifest_version(manifest_path)?;
    print_info(&format!("Installed client version: {installed}"));

    let records = held_catalog(replays_dir);
    let candidates: Vec<&ReplayRecord> = records
        .iter()
        .filter(|record| record.predates(&installed))
        .collect();

    if candidates.is_empty() {
        print_info("No old replays found to delete.");
        return Ok(());
    }

    for candidate in &candidates {
        log::debug!(
            "Cleanup candidate '{}' (version {})",
            candidate.path.display(),
            candidate.client_version
        );
    }

    if !args.yes && !confirm_deletion(candidates.len()) {
        print_info("Cleanup cancelled. No files were deleted.");
        return Ok(());
    }

    let mut deleted = 0;
    for candidate in &candidates {
        match std::fs::remove_file(&candidate.path) {
            Ok(()) => {
                log::debug!("Deleted '{}'", candidate.path.display());
                deleted += 1;
            }
            Err(e) => log::warn!("Failed to delete '{}': {}", candidate.path.display(), e),
        }
    }

    print_success(&format!("Successfully deleted {deleted} old replays."));

    // Reload from disk wholesale; the held catalog never shrinks in place.
    let mut remaining = scan_replay_directory(replays_dir);
    sort_records(&mut remaining, SortOrder::default());
    if let Err(e) = save_catalog_cache(&remaining, replays_dir.to_path_buf()) {
        log::warn!("Catalog cache save failed after cleanup: {e}");
    }

    print_info(&format!(
        "{} replays remain in the catalog.",
        remaining.len()
    ));

    Ok(())
}

// The held catalog is whatever the last list displayed; without one, fall
// back to a fresh scan.
fn held_catalog(replays_dir: &Path) -> Vec<ReplayRecord> {
    match load_catalog_cache(replays_dir) {
        Ok(records) => records,
        Err(e) => {
            log::debug!(
                "No usable catalog cache ({e}), scanning '{}'",
                replays_dir.display()
            );
            scan_replay_directory(replays_dir)
        }
    }
}

fn confirm_deletion(count: usize) -> bool {
    let prompt = format!("Found {count} old replays. Are you sure you want to delete them? [y/N]:");
    print!("\n{} ", prompt.blue());
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
