//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for quickdial operations, whatever UI drives them.
//!
//! The facade:
//! - **Owns** the session's [`ContactBook`], the region used to validate new
//!   numbers and the data directory holding `config.json`
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** (display index strings into [`DisplayIndex`])
//!
//! It does no printing and holds no business logic.
//!
//! ## Generic Over DataStore
//!
//! `QuickDialApi<S: DataStore>`:
//! - Production: `QuickDialApi<FileStore>`
//! - Testing: `QuickDialApi<InMemoryStore>`
//!
//! Tests here check dispatch and argument plumbing only. Command logic is
//! covered in the command modules.

use crate::book::ContactBook;
use crate::commands;
use crate::dialer::Dialer;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::search::SearchField;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct QuickDialApi<S: DataStore> {
    book: ContactBook<S>,
    region: String,
    data_dir: PathBuf,
}

impl<S: DataStore> QuickDialApi<S> {
    pub fn new(book: ContactBook<S>, region: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            book,
            region: region.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Opens (or seeds) the store and wraps it.
    pub fn open(store: S, region: impl Into<String>, data_dir: impl Into<PathBuf>) -> Result<Self> {
        let book = ContactBook::open(store)?;
        Ok(Self::new(book, region, data_dir))
    }

    pub fn book(&self) -> &ContactBook<S> {
        &self.book
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn add_contact(&mut self, name: &str, phone: &str, category: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.book, name, phone, category, &self.region)
    }

    pub fn delete_contact(&mut self, index: &str) -> Result<CmdResult> {
        let index: DisplayIndex = index.parse()?;
        commands::delete::run(&mut self.book, index)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn search_contacts(&self, term: &str, field: SearchField) -> Result<CmdResult> {
        commands::search::run(&self.book, term, field)
    }

    pub fn quick_dial(&self, digits: &str, dialer: Option<&mut dyn Dialer>) -> Result<CmdResult> {
        commands::dial::run(&self.book, digits, dialer)
    }

    pub fn export_contacts(&self, target: Option<&Path>) -> Result<CmdResult> {
        commands::export::run(&self.book, target)
    }

    pub fn import_contacts(&mut self, blob: &str) -> Result<CmdResult> {
        commands::import::run(&mut self.book, blob)
    }

    /// Reads or writes `config.json`. A new region applies to later adds in
    /// this session too.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.region = config.region.clone();
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialer::RecordingDialer;
    use crate::error::QuickDialError;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn make_api(dir: &Path) -> QuickDialApi<InMemoryStore> {
        QuickDialApi::open(InMemoryStore::new(), "US", dir).unwrap()
    }

    #[test]
    fn test_open_seeds_book() {
        let temp = TempDir::new().unwrap();
        let api = make_api(temp.path());
        assert_eq!(api.book().len(), 3);
        assert_eq!(api.region(), "US");
    }

    #[test]
    fn test_add_dispatches_with_region() {
        let temp = TempDir::new().unwrap();
        let mut api = make_api(temp.path());

        let result = api.add_contact("Office", "650-253-0000", "Work").unwrap();
        assert_eq!(result.affected_contacts.len(), 1);
        assert_eq!(api.book().len(), 4);
    }

    #[test]
    fn test_delete_parses_display_index() {
        let temp = TempDir::new().unwrap();
        let mut api = make_api(temp.path());

        api.delete_contact("2").unwrap();
        assert_eq!(api.book().len(), 2);
        assert_eq!(api.book().contacts()[1].name, "Bob Johnson");
    }

    #[test]
    fn test_delete_rejects_bad_index_text() {
        let temp = TempDir::new().unwrap();
        let mut api = make_api(temp.path());

        assert!(matches!(api.delete_contact("two"), Err(QuickDialError::Api(_))));
        assert!(matches!(api.delete_contact("0"), Err(QuickDialError::Api(_))));
        assert!(matches!(
            api.delete_contact("9"),
            Err(QuickDialError::Index { index: 9, len: 3 })
        ));
        assert_eq!(api.book().len(), 3);
    }

    #[test]
    fn test_list_and_search() {
        let temp = TempDir::new().unwrap();
        let api = make_api(temp.path());

        assert_eq!(api.list_contacts().unwrap().listed_contacts.len(), 3);
        let found = api.search_contacts("work", SearchField::Category).unwrap();
        assert_eq!(found.listed_contacts.len(), 1);
        assert_eq!(found.listed_contacts[0].contact.name, "Jane Smith");
    }

    #[test]
    fn test_quick_dial_passes_dialer() {
        let temp = TempDir::new().unwrap();
        let api = make_api(temp.path());
        let mut dialer = RecordingDialer::default();

        let result = api.quick_dial("321", Some(&mut dialer)).unwrap();
        assert_eq!(result.quick_dial.unwrap().name, "Jane Smith");
        assert_eq!(dialer.dialed, vec!["1987654321"]);
    }

    #[test]
    fn test_export_then_import() {
        let temp = TempDir::new().unwrap();
        let mut api = make_api(temp.path());

        let blob = api.export_contacts(None).unwrap().exported.unwrap();
        api.import_contacts(&blob).unwrap();
        assert_eq!(api.book().len(), 6);
    }

    #[test]
    fn test_config_region_applies_to_session() {
        let temp = TempDir::new().unwrap();
        let mut api = make_api(temp.path());

        api.config(ConfigAction::Set("region".into(), "ch".into()))
            .unwrap();
        assert_eq!(api.region(), "CH");

        // Swiss national format only validates under the new region.
        api.add_contact("Zurich", "044 668 1800", "Work").unwrap();
        assert_eq!(api.book().len(), 4);
    }
}
