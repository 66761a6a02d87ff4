//! # Contact Book
//!
//! [`ContactBook`] is the session's single source of truth: an ordered list of
//! contacts plus the [`DataStore`] it mirrors. It is an ordinary owned value.
//! Whoever drives a session (the API facade, a test) holds it and passes it by
//! reference into each operation.
//!
//! ## Persistence
//!
//! Every mutation builds the new sequence next to the current one, writes the
//! whole table, and only then swaps it in. If the write fails the error is
//! returned and the in-memory sequence is what it was before the call, so the
//! book and the file never disagree about a completed operation.
//!
//! ## Opening
//!
//! A missing table is seeded with [`sample_contacts`] and written immediately.
//! A table that exists but cannot be read is an error: it is never replaced,
//! since that would destroy whatever the user had in it.

use crate::error::{QuickDialError, Result};
use crate::model::{sample_contacts, Contact};
use crate::store::DataStore;
use crate::validation::check_phone;

pub struct ContactBook<S: DataStore> {
    store: S,
    contacts: Vec<Contact>,
}

impl<S: DataStore> ContactBook<S> {
    /// Loads the backing table, seeding it first when it does not exist.
    pub fn open(mut store: S) -> Result<Self> {
        let contacts = if store.exists() {
            store.read_table()?
        } else {
            let seeded = sample_contacts();
            store.write_table(&seeded)?;
            tracing::info!(location = %store.location(), "seeded new contact table");
            seeded
        };
        tracing::debug!(count = contacts.len(), "contact book opened");
        Ok(Self { store, contacts })
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Contact> {
        self.contacts.get(position)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a validated contact and persists.
    pub fn add(&mut self, name: &str, phone: &str, category: &str, region: &str) -> Result<&Contact> {
        if name.trim().is_empty() {
            return Err(QuickDialError::Validation("Name cannot be empty".to_string()));
        }
        if phone.trim().is_empty() {
            return Err(QuickDialError::Validation(
                "Phone number cannot be empty".to_string(),
            ));
        }
        let check = check_phone(phone, region);
        if let Some(message) = check.message() {
            return Err(QuickDialError::Validation(message));
        }

        let mut next = self.contacts.clone();
        next.push(Contact::new(name, phone, category));
        self.commit(next)?;
        tracing::info!(name, category, "contact added");

        let last = self.contacts.len() - 1;
        Ok(&self.contacts[last])
    }

    /// Removes the contact at `position` (0-based) and persists.
    pub fn delete(&mut self, position: usize) -> Result<Contact> {
        let len = self.contacts.len();
        if position >= len {
            return Err(QuickDialError::Index {
                index: position,
                len,
            });
        }

        let mut next = self.contacts.clone();
        let removed = next.remove(position);
        self.commit(next)?;
        tracing::info!(position, name = %removed.name, "contact deleted");
        Ok(removed)
    }

    /// Appends `incoming` after the existing contacts, in order, and persists.
    pub fn import_merge(&mut self, incoming: Vec<Contact>) -> Result<usize> {
        let count = incoming.len();
        let mut next = self.contacts.clone();
        next.extend(incoming);
        self.commit(next)?;
        tracing::info!(count, "contacts merged");
        Ok(count)
    }

    fn commit(&mut self, next: Vec<Contact>) -> Result<()> {
        if let Err(e) = self.store.write_table(&next) {
            tracing::warn!(location = %self.store.location(), error = %e, "persisting contacts failed");
            return Err(e);
        }
        self.contacts = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = "+1 650-253-0000";

    #[test]
    fn open_seeds_and_persists_missing_table() {
        let book = ContactBook::open(InMemoryStore::new()).unwrap();
        assert_eq!(book.contacts(), sample_contacts().as_slice());
        assert_eq!(book.store().write_count(), 1);
        assert!(book.store().exists());
    }

    #[test]
    fn open_loads_existing_table_without_writing() {
        let store = StoreFixture::new()
            .with_contact("Ada", "555", "Work")
            .build();
        let book = ContactBook::open(store).unwrap();
        assert_eq!(book.contacts(), &[Contact::new("Ada", "555", "Work")]);
        assert_eq!(book.store().write_count(), 1);
    }

    #[test]
    fn open_keeps_empty_table_empty() {
        let store = InMemoryStore::with_table("name,phone,category\n");
        let book = ContactBook::open(store).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn malformed_table_is_an_error_and_untouched() {
        let store = InMemoryStore::with_table("name,phone\nAda,555\n");
        let err = ContactBook::open(store).err().unwrap();
        assert!(matches!(err, QuickDialError::Storage(_)));
    }

    #[test]
    fn malformed_file_is_never_overwritten() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::in_dir(temp.path());
        let original = "name,phone\nAda,555\n";
        fs::write(store.path(), original).unwrap();
        let path = store.path().to_path_buf();

        assert!(ContactBook::open(store).is_err());
        assert_eq!(fs::read_to_string(path).unwrap(), original);
    }

    #[test]
    fn add_appends_and_persists() {
        let temp = TempDir::new().unwrap();
        let mut book = ContactBook::open(FileStore::in_dir(temp.path())).unwrap();
        let before = book.len();

        book.add("Grace", VALID, "Work", "US").unwrap();

        let reloaded = ContactBook::open(FileStore::in_dir(temp.path())).unwrap();
        assert_eq!(reloaded.len(), before + 1);
        assert_eq!(
            reloaded.contacts().last().unwrap(),
            &Contact::new("Grace", VALID, "Work")
        );
    }

    #[test]
    fn add_rejects_empty_fields() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        assert!(matches!(
            book.add("  ", VALID, "Work", "US"),
            Err(QuickDialError::Validation(_))
        ));
        assert!(matches!(
            book.add("Grace", "", "Work", "US"),
            Err(QuickDialError::Validation(_))
        ));
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn add_rejects_invalid_phone_without_writing() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        let err = book.add("Grace", "12345", "Work", "US").unwrap_err();
        match err {
            QuickDialError::Validation(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Validation, got {:?}", other),
        }
        assert_eq!(book.len(), 3);
        assert_eq!(book.store().write_count(), 1);
    }

    #[test]
    fn delete_shifts_following_contacts() {
        let store = StoreFixture::new().with_contacts(4).build();
        let mut book = ContactBook::open(store).unwrap();
        let third = book.get(2).cloned().unwrap();

        let removed = book.delete(1).unwrap();

        assert_eq!(removed.name, "Test Contact 2");
        assert_eq!(book.len(), 3);
        assert_eq!(book.get(1), Some(&third));
    }

    #[test]
    fn delete_out_of_range_is_index_error() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        let err = book.delete(3).unwrap_err();
        assert!(matches!(err, QuickDialError::Index { index: 3, len: 3 }));
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn failed_write_leaves_book_unchanged() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        book.store.set_fail_writes(true);

        assert!(book.add("Grace", VALID, "Work", "US").is_err());
        assert!(book.delete(0).is_err());
        assert!(book.import_merge(vec![Contact::new("X", "1", "y")]).is_err());
        assert_eq!(book.contacts(), sample_contacts().as_slice());
    }

    #[test]
    fn merge_appends_in_order() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        let incoming = vec![Contact::new("X", "1", "a"), Contact::new("Y", "2", "b")];
        assert_eq!(book.import_merge(incoming.clone()).unwrap(), 2);
        assert_eq!(&book.contacts()[3..], incoming.as_slice());
    }
}
