use crate::core::error::ReplayNavigatorError;
use std::path::{Path, PathBuf};

pub fn get_config_directory() -> Result<PathBuf, ReplayNavigatorError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        "windows" => dirs::config_dir().unwrap_or_default(),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join("replay-navigator"))
}

pub fn get_cache_directory() -> Result<PathBuf, ReplayNavigatorError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".cache")),
        "macos" => dirs::home_dir().unwrap_or_default().join("Library/Caches"),
        "windows" => dirs::cache_dir().unwrap_or_default(),
        _ => dirs::cache_dir().unwrap_or_default(),
    };

    Ok(base.join("replay-navigator"))
}

/// Returns the catalog cache file for a replay directory.
///
/// Each replay directory gets its own cache file, keyed by an md5 hash of the
/// directory path so unrelated directories never collide.
pub fn catalog_cache_file(replays_dir: &Path) -> Result<PathBuf, ReplayNavigatorError> {
    let cache_base = get_cache_directory()?;
    let dir_hash = format!("{:x}", md5::compute(replays_dir.to_string_lossy().as_bytes()));
    Ok(cache_base.join(dir_hash).join("catalog.json"))
}
