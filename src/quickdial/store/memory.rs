use super::{load_error, DataStore};
use crate::error::{QuickDialError, Result};
use crate::model::Contact;
use crate::table;

/// In-memory storage for testing and development.
/// Does NOT persist data. Keeps the serialized table text so the
/// codec runs exactly as it does for files.
#[derive(Default)]
pub struct InMemoryStore {
    table: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose backing table already holds `text`, well formed or not.
    pub fn with_table(text: impl Into<String>) -> Self {
        Self {
            table: Some(text.into()),
            ..Self::default()
        }
    }

    /// Raw table text, if anything was ever written.
    pub fn table_text(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Make every following write fail with an IO error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl DataStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.table.is_some()
    }

    fn read_table(&self) -> Result<Vec<Contact>> {
        let text = self
            .table
            .as_deref()
            .ok_or_else(|| QuickDialError::Storage("memory table is absent".to_string()))?;
        table::from_str(text).map_err(|e| load_error(&self.location(), e))
    }

    fn write_table(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.fail_writes {
            return Err(QuickDialError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        self.table = Some(table::to_string(contacts)?);
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        contacts: Vec<Contact>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                contacts: Vec::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phone: &str, category: &str) -> Self {
            self.contacts.push(Contact::new(name, phone, category));
            self
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                self.contacts.push(Contact::new(
                    format!("Test Contact {}", i + 1),
                    format!("+1 650 253 {:04}", i),
                    "Other",
                ));
            }
            self
        }

        /// Writes the accumulated contacts as the existing backing table.
        pub fn build(mut self) -> InMemoryStore {
            self.store.write_table(&self.contacts).unwrap();
            self.store
        }
    }
}
