use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{HubError, Result};

pub const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_SCHOOL_NAME: &str = "Richmond Hill School";

/// Configuration for teachhub, stored as config.json in the platform
/// config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HubConfig {
    /// School name shown in the session banner (default: "Richmond Hill School")
    #[serde(default = "default_school_name")]
    pub school_name: String,

    /// Whether new sessions start with the sample roster (default: true)
    #[serde(default = "default_seed_roster")]
    pub seed_roster: bool,
}

fn default_school_name() -> String {
    DEFAULT_SCHOOL_NAME.to_string()
}

fn default_seed_roster() -> bool {
    true
}

impl Default for HubConfig {
    fn default() -> Self {
        HubConfig {
            school_name: default_school_name(),
            seed_roster: default_seed_roster(),
        }
    }
}

impl HubConfig {
    /// Load configuration from the given directory, falling back to
    /// defaults when no file exists yet.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path).map_err(HubError::Io)?;
        let config: HubConfig =
            serde_json::from_str(&contents).map_err(HubError::Serialization)?;
        Ok(config)
    }

    /// Save configuration to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let dir = config_dir.as_ref();
        fs::create_dir_all(dir).map_err(HubError::Io)?;
        let path = dir.join(CONFIG_FILENAME);
        let contents = serde_json::to_string_pretty(self).map_err(HubError::Serialization)?;
        fs::write(&path, contents).map_err(HubError::Io)?;
        Ok(())
    }

    /// Value for a settable key, `None` when the key is unknown.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "school-name" => Some(self.school_name.clone()),
            "seed-roster" => Some(self.seed_roster.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its string form. Returns a message describing the
    /// rejection when the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "school-name" => {
                if value.trim().is_empty() {
                    return Err("school-name cannot be empty".to_string());
                }
                self.school_name = value.to_string();
                Ok(())
            }
            "seed-roster" => match value.parse::<bool>() {
                Ok(flag) => {
                    self.seed_roster = flag;
                    Ok(())
                }
                Err(_) => Err(format!("seed-roster expects true or false, got '{}'", value)),
            },
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = HubConfig::default();
        assert_eq!(config.school_name, "Richmond Hill School");
        assert!(config.seed_roster);
    }

    #[test]
    fn load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = HubConfig::load(dir.path()).unwrap();
        assert_eq!(config, HubConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = HubConfig::default();
        config.set("school-name", "Northern Secondary").unwrap();
        config.set("seed-roster", "false").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = HubConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.school_name, "Northern Secondary");
        assert!(!loaded.seed_roster);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"school_name": "Westlake Academy"}"#,
        )
        .unwrap();

        let loaded = HubConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.school_name, "Westlake Academy");
        assert!(loaded.seed_roster);
    }

    #[test]
    fn set_rejects_bad_input() {
        let mut config = HubConfig::default();
        assert!(config.set("seed-roster", "maybe").is_err());
        assert!(config.set("school-name", "   ").is_err());
        assert!(config.set("mystery-key", "value").is_err());
        assert_eq!(config, HubConfig::default());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let config = HubConfig::default();
        assert_eq!(config.get("school-name").as_deref(), Some("Richmond Hill School"));
        assert_eq!(config.get("seed-roster").as_deref(), Some("true"));
        assert_eq!(config.get("mystery-key"), None);
    }
}
