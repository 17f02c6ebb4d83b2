//! Replay launch strategies.
//!
//! A replay is handed to the game executable directly on Windows, or routed
//! through a Bottles wine prefix with `bottles-cli` on Linux. The strategy is
//! chosen once per invocation from the host OS and the settings; the spawn is
//! detached and never waited on.

use crate::core::config::Settings;
use crate::core::error::{ReplayNavigatorError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

const BOTTLES_CLI: &str = "bottles-cli";

/// How a replay path reaches the game executable on this host.
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchStrategy {
    /// Windows: the executable takes the replay path directly.
    Direct { executable: PathBuf },
    /// Linux: run inside a Bottles prefix via `bottles-cli`.
    Bottles { bottle: String, executable: PathBuf },
}

impl LaunchStrategy {
    /// Picks the strategy for the current host from the settings.
    pub fn for_host(settings: &Settings) -> Result<Self> {
        Self::for_os(std::env::consts::OS, settings)
    }

    fn for_os(os: &str, settings: &Settings) -> Result<Self> {
        let executable = settings.require_executable()?.to_path_buf();

        match os {
            "windows" => Ok(Self::Direct { executable }),
            "linux" => {
                let bottle = settings.bottle_name.trim();
                if bottle.is_empty() {
                    return Err(ReplayNavigatorError::BottleNotSet);
                }
                Ok(Self::Bottles {
                    bottle: bottle.to_string(),
                    executable,
                })
            }
            other => Err(ReplayNavigatorError::unsupported_platform(other)),
        }
    }

    fn command(&self, replay: &Path) -> Command {
        match self {
            Self::Direct { executable } => {
                let mut command = Command::new(executable);
                command.arg(replay);
                command
            }
            Self::Bottles { bottle, executable } => {
                let mut command = Command::new(BOTTLES_CLI);
                command
                    .arg("run")
                    .arg("-b")
                    .arg(bottle)
                    .arg("-e")
                    .arg(executable)
                    .arg("--args")
                    .arg(replay);
                command
            }
        }
    }

    /// Spawns the game with `replay` and detaches.
    pub fn launch(&self, replay: &Path) -> Result<()> {
        match self.command(replay).spawn() {
            // Drop the handle; the game outlives this process.
            Ok(_child) => Ok(()),
            Err(e)
                if e.kind() == std::io::ErrorKind::NotFound
                    && matches!(self, Self::Bottles { .. }) =>
            {
                Err(ReplayNavigatorError::BottlesCliMissing)
            }
            Err(e) => Err(ReplayNavigatorError::launch_failed(self.program_name(), e)),
        }
    }

    fn program_name(&self) -> String {
        match self {
            Self::Direct { executable } => executable.display().to_string(),
            Self::Bottles { .. } => BOTTLES_CLI.to_string(),
        }
    }
}
