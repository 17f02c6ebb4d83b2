use crate::core::{
    config::Settings,
    error::Result,
    output::{print_section_header, print_success},
};
use clap::Args;
use colored::*;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Directory scanned for .wotreplay files
    #[arg(long)]
    pub replays_dir: Option<PathBuf>,

    /// Path to the game executable (WorldOfTanks.exe)
    #[arg(long)]
    pub executable: Option<PathBuf>,

    /// Path to the game's version.xml manifest
    #[arg(long)]
    pub version_manifest: Option<PathBuf>,

    /// Bottles prefix name used for launching on Linux
    #[arg(long)]
    pub bottle: Option<String>,
}

impl SettingsArgs {
    fn is_empty(&self) -> bool {
        self.replays_dir.is_none()
            && self.executable.is_none()
            && self.version_manifest.is_none()
            && self.bottle.is_none()
    }
}

pub fn execute_settings(args: &SettingsArgs) -> Result<()> {
    let mut settings = Settings::load_or_create()?;

    if args.is_empty() {
        show_settings(&settings);
        return Ok(());
    }

    if let Some(dir) = &args.replays_dir {
        warn_if_missing(dir);
        settings.replays_dir = Some(dir.clone());
    }
    if let Some(executable) = &args.executable {
        warn_if_missing(executable);
        settings.executable_path = Some(executable.clone());
    }
    if let Some(manifest) = &args.version_manifest {
        warn_if_missing(manifest);
        settings.version_manifest_path = Some(manifest.clone());
    }
    if let Some(bottle) = &args.bottle {
        settings.bottle_name = bottle.clone();
    }

    settings.save()?;
    print_success("Settings saved.");
    show_settings(&settings);

    Ok(())
}

// Paths are saved as given; the game may live on a drive that is not
// mounted yet, so a missing path is only worth a warning.
fn warn_if_missing(path: &Path) {
    if !path.exists() {
        log::warn!("Path does not exist (saved anyway): {}", path.display());
    }
}

fn show_settings(settings: &Settings) {
    print_section_header("Settings");

    print_path_setting("Replay directory", settings.replays_dir.as_deref());
    print_path_setting("Game executable", settings.executable_path.as_deref());
    print_path_setting("Version manifest", settings.version_manifest_path.as_deref());
    println!(
        "  {} {}",
        format!("{:<18}", "Bottle name").white(),
        settings.bottle_name.blue()
    );
    println!();
}

fn print_path_setting(label: &str, value: Option<&Path>) {
    let rendered = match value {
        Some(path) => path.display().to_string().blue(),
        None => "(not set)".bright_black(),
    };
    println!("  {} {}", format!("{label:<18}").white(), rendered);
}
