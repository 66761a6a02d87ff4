use super::{load_error, DataStore};
use crate::error::{QuickDialError, Result};
use crate::model::Contact;
use crate::table;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "contacts.csv";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/contacts.csv`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(QuickDialError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_table(&self) -> Result<Vec<Contact>> {
        let file = fs::File::open(&self.path).map_err(|e| {
            QuickDialError::Storage(format!("{} could not be read: {}", self.location(), e))
        })?;
        let contacts = table::read_contacts(file).map_err(|e| load_error(&self.location(), e))?;
        tracing::debug!(path = %self.path.display(), rows = contacts.len(), "read contact table");
        Ok(contacts)
    }

    fn write_table(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent()?;
        let content = table::to_string(contacts)?;
        fs::write(&self.path, content).map_err(QuickDialError::Io)?;
        tracing::debug!(path = %self.path.display(), rows = contacts.len(), "wrote contact table");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_does_not_exist() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::in_dir(temp.path());
        assert!(!store.exists());
        assert_eq!(store.path(), temp.path().join("contacts.csv"));
    }

    #[test]
    fn write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(temp.path().join("nested").join("dir"));
        store
            .write_table(&[Contact::new("Ada", "555", "Work")])
            .unwrap();
        assert!(store.exists());
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(temp.path());
        let contacts = vec![
            Contact::new("John Doe", "+1234567890", "Family"),
            Contact::new("Smith, Jane", "+1 (987) 654-321", "Work"),
        ];
        store.write_table(&contacts).unwrap();
        assert_eq!(store.read_table().unwrap(), contacts);
    }

    #[test]
    fn write_replaces_previous_content() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(temp.path());
        store
            .write_table(&[Contact::new("A", "1", "x"), Contact::new("B", "2", "y")])
            .unwrap();
        store.write_table(&[Contact::new("C", "3", "z")]).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "name,phone,category\nC,3,z\n");
    }

    #[test]
    fn malformed_file_is_a_storage_error() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::in_dir(temp.path());
        fs::write(store.path(), "name,phone\nAda,555\n").unwrap();

        let err = store.read_table().unwrap_err();
        match err {
            QuickDialError::Storage(msg) => assert!(msg.contains("category")),
            other => panic!("expected Storage error, got {:?}", other),
        }
    }
}
