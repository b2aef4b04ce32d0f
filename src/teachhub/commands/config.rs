use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::HubConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Show all settings
    ShowAll,
    /// Show one setting
    ShowKey(String),
    /// Set a key to a value and persist it
    Set(String, String),
}

/// Reads or writes the persisted configuration. Settings take effect for
/// the next session; the running store is not reshaped.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {
            let config = HubConfig::load(config_dir)?;
            result = result.with_config(config);
        }
        ConfigAction::ShowKey(key) => {
            let config = HubConfig::load(config_dir)?;
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(format!("{} = {}", key, value))),
                None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = HubConfig::load(config_dir)?;
            if let Err(reason) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(reason));
                return Ok(result);
            }
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            result = result.with_config(config);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("school-name".to_string(), "Northern Secondary".to_string()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let shown = run(dir.path(), ConfigAction::ShowKey("school-name".to_string())).unwrap();
        assert_eq!(shown.messages[0].content, "school-name = Northern Secondary");

        let all = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().school_name, "Northern Secondary");
    }

    #[test]
    fn unknown_key_reports_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("mystery".to_string())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);

        let result = run(
            dir.path(),
            ConfigAction::Set("mystery".to_string(), "value".to_string()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join(crate::config::CONFIG_FILENAME).exists());
    }

    #[test]
    fn bad_value_does_not_persist() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("seed-roster".to_string(), "maybe".to_string()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join(crate::config::CONFIG_FILENAME).exists());
    }
}
