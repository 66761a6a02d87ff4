use crate::commands::{CmdMessage, CmdResult};
use crate::config::QuickDialConfig;
use crate::error::{QuickDialError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = QuickDialConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = QuickDialConfig::load(config_dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| QuickDialError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = QuickDialConfig::load(config_dir)?;
            config.set(&key, &value)?;
            config.save(config_dir)?;
            tracing::info!(%key, "config updated");
            let display_val = config.get(&key).unwrap_or_default();
            let message = if display_val.is_empty() {
                format!("{} cleared", key)
            } else {
                format!("{} set to {}", key, display_val)
            };
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(message));
            Ok(result)
        }
    }
}
