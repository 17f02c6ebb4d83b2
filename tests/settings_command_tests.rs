use predicates::prelude::*;

mod common;
use common::workspace::*;
use replay_navigator::core::config::Settings;

#[cfg(test)]
mod settings_command_tests {
    use super::*;

    #[test]
    fn test_bare_settings_shows_defaults() -> anyhow::Result<()> {
        let workspace = setup_workspace()?;

        workspace
            .command()
            .arg("settings")
            .assert()
            .success()
            .stdout(predicate::str::contains("Settings"))
            .stdout(predicate::str::contains("WindowsGames"))
            .stdout(predicate::str::contains("(not set)"));

        assert!(workspace.settings_file().exists());
        Ok(())
    }

    #[test]
    fn test_settings_listing_shows_each_key() -> anyhow::Result<()> {
        let workspace = setup_configured_workspace()?;

        workspace
            .command()
            .arg("settings")
            .assert()
            .success()
            .stdout(predicate::str::contains("Replay directory"))
            .stdout(predicate::str::contains("Game executable"))
            .stdout(predicate::str::contains("Version manifest"))
            .stdout(predicate::str::contains("Bottle name"));

        Ok(())
    }

    #[test]
    fn test_flags_persist_to_the_config_file() -> anyhow::Result<()> {
        let workspace = setup_workspace()?;

        workspace
            .command()
            .args([
                "settings",
                "--replays-dir",
                workspace.replays_dir().to_str().unwrap(),
                "--bottle",
                "Gaming",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Settings saved."))
            .stdout(predicate::str::contains("Gaming"));

        let content = std::fs::read_to_string(workspace.settings_file())?;
        let saved: Settings = serde_json::from_str(&content)?;
        assert_eq!(saved.bottle_name, "Gaming");
        assert_eq!(saved.replays_dir.as_deref(), Some(workspace.replays_dir()));
        assert_eq!(saved.executable_path, None);
        Ok(())
    }

    #[test]
    fn test_partial_update_keeps_other_settings() -> anyhow::Result<()> {
        let workspace = setup_configured_workspace()?;

        workspace
            .command()
            .args(["settings", "--bottle", "OtherBottle"])
            .assert()
            .success();

        let content = std::fs::read_to_string(workspace.settings_file())?;
        let saved: Settings = serde_json::from_str(&content)?;
        assert_eq!(saved.bottle_name, "OtherBottle");
        assert_eq!(saved.replays_dir.as_deref(), Some(workspace.replays_dir()));
        assert_eq!(saved.executable_path, Some(workspace.executable_path()));
        assert_eq!(
            saved.version_manifest_path,
            Some(workspace.manifest_path())
        );
        Ok(())
    }

    #[test]
    fn test_nonexistent_path_is_saved_anyway() -> anyhow::Result<()> {
        let workspace = setup_workspace()?;

        workspace
            .command()
            .args(["settings", "--executable", "/not/mounted/WorldOfTanks.exe"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Settings saved."));

        let content = std::fs::read_to_string(workspace.settings_file())?;
        assert!(content.contains("/not/mounted/WorldOfTanks.exe"));
        Ok(())
    }
}
