use crate::api::QuickDialApi;
use crate::config::QuickDialConfig;
use crate::error::{QuickDialError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Overrides the data directory (contacts.csv and config.json).
pub const HOME_ENV: &str = "QUICKDIAL_HOME";

pub struct QuickDialContext {
    pub api: QuickDialApi<FileStore>,
    pub config: QuickDialConfig,
}

/// `$QUICKDIAL_HOME` when set and non-empty, else the platform data directory.
pub fn resolve_data_dir(home: Option<OsString>) -> Result<PathBuf> {
    if let Some(home) = home.filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "quickdial", "quickdial")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            QuickDialError::Config(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

pub fn initialize(contacts_file: Option<&Path>) -> Result<QuickDialContext> {
    let data_dir = resolve_data_dir(std::env::var_os(HOME_ENV))?;
    initialize_in(&data_dir, contacts_file)
}

/// Loads config from `data_dir` and opens the contacts file, seeding it if
/// absent. `contacts_file` replaces `<data_dir>/contacts.csv`.
pub fn initialize_in(data_dir: &Path, contacts_file: Option<&Path>) -> Result<QuickDialContext> {
    let config = QuickDialConfig::load(data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
        QuickDialConfig::default()
    });

    let store = match contacts_file {
        Some(path) => FileStore::new(path),
        None => FileStore::in_dir(data_dir),
    };
    tracing::debug!(path = %store.path().display(), region = %config.region, "initializing");

    let api = QuickDialApi::open(store, config.region.clone(), data_dir)?;
    Ok(QuickDialContext { api, config })
}
