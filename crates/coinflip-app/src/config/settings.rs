//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use coinflip_core::prelude::*;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "coinflip";

/// User settings. Everything defaults; a missing config file is normal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub commands: CommandSettings,
    pub storage: StorageSettings,
}

/// Cosmetic label choices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which emoji frames the settled Tails label
    pub tails_style: TailsStyle,
}

/// The two shipped label variants differ only in the Tails emoji
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailsStyle {
    #[default]
    Coin,
    Sparkle,
}

/// Which commands are exposed as key bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSettings {
    /// Expose the toss command (`f` / Enter)
    pub toss: bool,
    /// Expose the reset command (`r`)
    pub reset: bool,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            toss: true,
            reset: true,
        }
    }
}

/// Where persisted state lives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the data directory (stats + logs).
    /// Defaults to `~/.local/share/coinflip`.
    pub data_dir: Option<PathBuf>,
}

/// Default config file location: `~/.config/coinflip/config.toml`
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the given path, or the default location.
/// Never fails: absent or malformed files fall back to defaults.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let config_path = match config_path {
        Some(path) => path.to_path_buf(),
        None => default_config_path(),
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

impl Settings {
    /// Resolve the data directory, honoring the override
    pub fn data_dir(&self) -> PathBuf {
        match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => coinflip_core::logging::default_data_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.display.tails_style, TailsStyle::Coin);
        assert!(settings.commands.toss);
        assert!(settings.commands.reset);
        assert!(settings.storage.data_dir.is_none());
    }

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let settings = load_settings(Some(&temp.path().join("config.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[display]
tails_style = "sparkle"

[commands]
reset = false

[storage]
data_dir = "/tmp/cf-data"
"#,
        )
        .expect("write config");

        let settings = load_settings(Some(&path));
        assert_eq!(settings.display.tails_style, TailsStyle::Sparkle);
        assert!(settings.commands.toss);
        assert!(!settings.commands.reset);
        assert_eq!(settings.storage.data_dir, Some(PathBuf::from("/tmp/cf-data")));
    }

    #[test]
    fn test_load_settings_malformed_uses_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "display = \"not a table").expect("write config");

        let settings = load_settings(Some(&path));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_data_dir_override() {
        let mut settings = Settings::default();
        settings.storage.data_dir = Some(PathBuf::from("/tmp/elsewhere"));
        assert_eq!(settings.data_dir(), PathBuf::from("/tmp/elsewhere"));
    }
}
