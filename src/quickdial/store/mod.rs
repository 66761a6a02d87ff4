//! # Storage Layer
//!
//! The [`DataStore`] trait is the only thing the contact book knows about
//! persistence: does a backing table exist, read all of it, overwrite all of it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single CSV file
//!   (`contacts.csv` in the data directory by default).
//! - [`memory::InMemoryStore`]: Holds the CSV text in memory, for tests.
//!   It goes through the same codec as the file store, so malformed tables
//!   can be simulated without touching the filesystem.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── contacts.csv      # name,phone,category + one row per contact
//! └── config.json       # QuickDialConfig
//! ```
//!
//! There is no partial update: every write replaces the whole table.

use crate::error::{QuickDialError, Result};
use crate::model::Contact;
use crate::table::TableError;

pub mod fs;
pub mod memory;

/// Abstract interface for the backing contact table.
pub trait DataStore {
    /// Whether a backing table is present at all.
    fn exists(&self) -> bool;

    /// Read every row, in file order.
    fn read_table(&self) -> Result<Vec<Contact>>;

    /// Replace the backing table with exactly these rows.
    fn write_table(&mut self, contacts: &[Contact]) -> Result<()>;

    /// Where the table lives, for messages and logs.
    fn location(&self) -> String;
}

/// Maps a codec failure on load to a storage error naming the table.
pub(crate) fn load_error(location: &str, err: TableError) -> QuickDialError {
    match err {
        TableError::MissingColumns(missing) => QuickDialError::Storage(format!(
            "{} is missing required columns: {}",
            location,
            missing.join(", ")
        )),
        TableError::Csv(e) => {
            QuickDialError::Storage(format!("{} could not be parsed: {}", location, e))
        }
    }
}
