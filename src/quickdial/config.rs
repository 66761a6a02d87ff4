use crate::error::{QuickDialError, Result};
use crate::validation::{is_known_region, DEFAULT_REGION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `get`/`set`, in display order.
pub const KEYS: [&str; 2] = ["region", "dialer"];

/// Stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickDialConfig {
    /// Region assumed for numbers entered without a country prefix (e.g. "US", "GB")
    #[serde(default = "default_region")]
    pub region: String,

    /// Command used to place calls, with the `tel:` URL appended as its last
    /// argument. When unset the platform opener is used.
    #[serde(default)]
    pub dialer: Option<String>,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for QuickDialConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            dialer: None,
        }
    }
}

impl QuickDialConfig {
    /// Reads `<config_dir>/config.json`. A missing file means defaults;
    /// missing keys inside the file take their defaults too.
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self> {
        let path = config_dir.as_ref().join(CONFIG_FILENAME);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes `<config_dir>/config.json`, creating the directory if needed.
    pub fn save(&self, config_dir: impl AsRef<Path>) -> Result<()> {
        let dir = config_dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "region" => Some(self.region.clone()),
            "dialer" => Some(self.dialer.clone().unwrap_or_default()),
            _ => None,
        }
    }

    /// Sets a key. An empty `dialer` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "region" => {
                if !is_known_region(value) {
                    return Err(QuickDialError::Config(format!(
                        "Unknown region code: {}",
                        value
                    )));
                }
                self.region = value.trim().to_ascii_uppercase();
            }
            "dialer" => {
                let value = value.trim();
                self.dialer = (!value.is_empty()).then(|| value.to_string());
            }
            _ => {
                return Err(QuickDialError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}
