use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuickDialError, Result};
use crate::store::DataStore;
use crate::table;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Serializes the whole book. With a `target` the blob is also written there.
pub fn run<S: DataStore>(book: &ContactBook<S>, target: Option<&Path>) -> Result<CmdResult> {
    let blob = table::to_string(book.contacts())?;
    let mut result = CmdResult::default();

    if let Some(path) = target {
        fs::write(path, &blob).map_err(QuickDialError::Io)?;
        result.add_message(CmdMessage::success(format!(
            "Exported {} contacts to {}",
            book.len(),
            path.display()
        )));
    }

    Ok(result.with_exported(blob))
}

/// `contacts-2024-05-01_13-45-10.csv`
pub fn default_filename(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("contacts-{}.csv", now.format("%Y-%m-%d_%H-%M-%S")))
}
