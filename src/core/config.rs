use crate::core::dirs::get_config_directory;
use crate::core::error::ReplayNavigatorError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BOTTLE: &str = "WindowsGames";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Settings {
    pub bottle_name: String,
    pub replays_dir: Option<PathBuf>,
    pub executable_path: Option<PathBuf>,
    pub version_manifest_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bottle_name: DEFAULT_BOTTLE.to_string(),
            replays_dir: None,
            executable_path: None,
            version_manifest_path: None,
        }
    }
}

impl Settings {
    pub fn load_or_create() -> Result<Self, ReplayNavigatorError> {
        let config_dir = get_config_directory()?;
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let settings = Self::default();
            settings.save()?;
            Ok(settings)
        }
    }

    pub fn save(&self) -> Result<(), ReplayNavigatorError> {
        let config_dir = get_config_directory()?;
        std::fs::create_dir_all(&config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    pub fn require_replays_dir(&self) -> Result<&Path, ReplayNavigatorError> {
        self.replays_dir
            .as_deref()
            .ok_or(ReplayNavigatorError::ReplaysDirNotSet)
    }

    pub fn require_executable(&self) -> Result<&Path, ReplayNavigatorError> {
        self.executable_path
            .as_deref()
            .ok_or(ReplayNavigatorError::ExecutableNotSet)
    }

    pub fn require_manifest_path(&self) -> Result<&Path, ReplayNavigatorError> {
        self.version_manifest_path
            .as_deref()
            .ok_or(ReplayNavigatorError::ManifestPathNotSet)
    }
}
