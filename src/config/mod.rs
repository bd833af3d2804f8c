pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{RosterEntry, ScreenConfig, UiConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swipelist")
        .join("config.toml")
}

/// Loads the screen configuration from the platform config directory.
pub fn load_config() -> Result<ScreenConfig> {
    load_config_from(&config_path())
}

/// Loads the screen configuration from an explicit path.
///
/// A missing file is not an error: the built-in defaults are used instead.
pub fn load_config_from(path: &Path) -> Result<ScreenConfig> {
    if !path.exists() {
        return Ok(ScreenConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: ScreenConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_seed_the_demo_roster() {
        let config = ScreenConfig::default();
        assert_eq!(config.roster.len(), 6);
        assert_eq!(config.roster[0].name, "John Smith");
        assert_eq!(config.roster[5].name, "Guilherme Smith");
        assert!(config
            .roster
            .iter()
            .all(|entry| !entry.favorite && !entry.muted));
        assert_eq!(config.ui.title, "Custom Swipe Actions");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.roster.len(), 6);
        assert_eq!(config.ui.title, "Custom Swipe Actions");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[ui]
title = "People"

[[roster]]
name = "Ann"
favorite = true

[[roster]]
name = "Ben"
"#,
        )
        .unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.ui.title, "People");
        assert_eq!(config.roster.len(), 2);
        assert!(config.roster[0].favorite);
        assert!(!config.roster[0].muted);
        assert!(!config.roster[1].favorite);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "roster = 3").unwrap();
        assert!(load_config_from(&path).is_err());
    }
}
