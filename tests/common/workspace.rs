//! Test workspace management and setup utilities
//!
//! Provides functions for creating isolated test environments: a scratch HOME
//! with private config and cache directories plus a replay directory, so the
//! compiled binary never touches the real user profile.

#![allow(dead_code)]

use assert_cmd::Command;
use replay_navigator::core::config::Settings;
use replay_navigator::core::error::{ReplayNavigatorError, Result};
use replay_navigator::core::record::{CatalogCache, ReplayRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test workspace containing the temporary directory and the replay directory
/// inside it. The TempDir must be kept alive for the duration of the test to
/// prevent cleanup.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub replays_dir: PathBuf,
}

impl TestWorkspace {
    /// Get the replay directory path as a reference
    pub fn replays_dir(&self) -> &Path {
        &self.replays_dir
    }

    /// Private XDG_CONFIG_HOME for this workspace
    pub fn config_home(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    /// Private XDG_CACHE_HOME for this workspace
    pub fn cache_home(&self) -> PathBuf {
        self.temp_dir.path().join("cache")
    }

    /// Path used as the game executable setting
    pub fn executable_path(&self) -> PathBuf {
        self.temp_dir.path().join("WorldOfTanks.exe")
    }

    /// Path used as the version manifest setting
    pub fn manifest_path(&self) -> PathBuf {
        self.temp_dir.path().join("version.xml")
    }

    /// Builds a command for the binary with HOME and the XDG directories
    /// pointed into this workspace
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("replay-navigator")
            .expect("replay-navigator binary should be built for integration tests");
        cmd.env("HOME", self.temp_dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_CACHE_HOME", self.cache_home());
        cmd
    }

    /// Writes a settings file with every key pointing into the workspace
    pub fn write_settings(&self) -> Result<()> {
        let settings = Settings {
            bottle_name: "WindowsGames".to_string(),
            replays_dir: Some(self.replays_dir.clone()),
            executable_path: Some(self.executable_path()),
            version_manifest_path: Some(self.manifest_path()),
        };
        self.write_settings_with(&settings)
    }

    /// Writes an arbitrary settings file into the workspace config home
    pub fn write_settings_with(&self, settings: &Settings) -> Result<()> {
        let config_dir = self.config_home().join("replay-navigator");
        fs::create_dir_all(&config_dir).map_err(|e| ReplayNavigatorError::Io(e))?;

        let content = serde_json::to_string_pretty(settings)?;
        fs::write(config_dir.join("config.json"), content)
            .map_err(|e| ReplayNavigatorError::Io(e))?;
        Ok(())
    }

    /// Creates a file with replay extension and junk contents (the decoder
    /// will reject it, which is exactly what the skip-path tests need)
    pub fn add_replay_file(&self, name: &str) -> Result<PathBuf> {
        self.add_file(name, "\u{12}junk bytes, not a real replay")
    }

    /// Creates an arbitrary file inside the replay directory
    pub fn add_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.replays_dir.join(name);
        fs::write(&path, contents).map_err(|e| ReplayNavigatorError::Io(e))?;
        Ok(path)
    }

    /// Writes a version.xml manifest with the given version element text
    pub fn write_manifest(&self, version_text: &str) -> Result<()> {
        let content = format!(
            "<version.xml>\n\t<protocol>\t2.0\t</protocol>\n\t<version>\t{version_text}\t</version>\n\t<executable>\tWorldOfTanks.exe\t</executable>\n</version.xml>\n"
        );
        fs::write(self.manifest_path(), content).map_err(|e| ReplayNavigatorError::Io(e))?;
        Ok(())
    }

    /// Persists a fabricated catalog cache, as if `list` had just displayed
    /// these records
    pub fn write_catalog_cache(&self, records: &[ReplayRecord]) -> Result<()> {
        let cache_file = self.catalog_cache_file();
        if let Some(parent) = cache_file.parent() {
            fs::create_dir_all(parent).map_err(|e| ReplayNavigatorError::Io(e))?;
        }

        let cache = CatalogCache::new(records.to_vec(), self.replays_dir.clone());
        let content = serde_json::to_string_pretty(&cache)?;
        fs::write(cache_file, content).map_err(|e| ReplayNavigatorError::Io(e))?;
        Ok(())
    }

    /// The catalog cache file the binary resolves for this workspace's
    /// replay directory
    pub fn catalog_cache_file(&self) -> PathBuf {
        let dir_hash = format!(
            "{:x}",
            md5::compute(self.replays_dir.to_string_lossy().as_bytes())
        );
        self.cache_home()
            .join("replay-navigator")
            .join(dir_hash)
            .join("catalog.json")
    }

    /// The settings file the binary resolves for this workspace
    pub fn settings_file(&self) -> PathBuf {
        self.config_home().join("replay-navigator").join("config.json")
    }
}

/// Sets up a fresh workspace with empty replay, config, and cache directories
pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new().map_err(|e| ReplayNavigatorError::Io(e))?;
    let replays_dir = temp_dir.path().join("replays");

    fs::create_dir_all(&replays_dir).map_err(|e| ReplayNavigatorError::Io(e))?;
    fs::create_dir_all(temp_dir.path().join("config")).map_err(|e| ReplayNavigatorError::Io(e))?;
    fs::create_dir_all(temp_dir.path().join("cache")).map_err(|e| ReplayNavigatorError::Io(e))?;

    Ok(TestWorkspace {
        temp_dir,
        replays_dir,
    })
}

/// Sets up a workspace whose settings file already points every key into it
pub fn setup_configured_workspace() -> Result<TestWorkspace> {
    let workspace = setup_workspace()?;
    workspace.write_settings()?;
    Ok(workspace)
}
