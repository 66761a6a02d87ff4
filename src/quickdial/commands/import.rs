use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuickDialError, Result};
use crate::store::DataStore;
use crate::table::{self, TableError};

/// Merges a CSV blob into the book. The blob must carry `name`, `phone` and
/// `category` columns; otherwise nothing is changed.
pub fn run<S: DataStore>(book: &mut ContactBook<S>, blob: &str) -> Result<CmdResult> {
    let incoming = table::from_str(blob).map_err(|e| match e {
        TableError::MissingColumns(missing) => QuickDialError::Schema { missing },
        TableError::Csv(e) => QuickDialError::Csv(e),
    })?;

    let mut result = CmdResult::default();
    if incoming.is_empty() {
        result.add_message(CmdMessage::info("No contacts to import."));
        return Ok(result);
    }

    let count = book.import_merge(incoming.clone())?;
    result.add_message(CmdMessage::success(format!(
        "Contacts imported successfully: {}",
        count
    )));
    Ok(result.with_affected_contacts(incoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::export;
    use crate::model::{sample_contacts, Contact};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_incoming_after_existing() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        let blob = "name,phone,category\nAda,555-0100,Work\nAlan,555-0199,Friends\n";

        let result = run(&mut book, blob).unwrap();

        assert_eq!(result.affected_contacts.len(), 2);
        assert_eq!(book.len(), 5);
        assert_eq!(book.contacts()[3], Contact::new("Ada", "555-0100", "Work"));
        assert_eq!(book.contacts()[4].name, "Alan");
        assert_eq!(book.store().write_count(), 2);
    }

    #[test]
    fn missing_category_is_schema_error_and_changes_nothing() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        let err = run(&mut book, "name,phone\nAda,555\n").unwrap_err();

        match err {
            QuickDialError::Schema { missing } => assert_eq!(missing, vec!["category"]),
            other => panic!("expected Schema, got {:?}", other),
        }
        assert_eq!(book.contacts(), sample_contacts().as_slice());
        assert_eq!(book.store().write_count(), 1);
    }

    #[test]
    fn imported_rows_are_not_phone_validated() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        run(&mut book, "name,phone,category\nDoorbell,12,Home\n").unwrap();
        assert_eq!(book.contacts()[3].phone, "12");
    }

    #[test]
    fn header_only_blob_imports_nothing() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        let result = run(&mut book, "name,phone,category\n").unwrap();
        assert_eq!(book.len(), 3);
        assert_eq!(result.messages[0].content, "No contacts to import.");
        assert_eq!(book.store().write_count(), 1);
    }

    #[test]
    fn export_then_import_duplicates_rows() {
        let mut book = ContactBook::open(InMemoryStore::new()).unwrap();
        let blob = export::run(&book, None).unwrap().exported.unwrap();
        run(&mut book, &blob).unwrap();

        let mut expected = sample_contacts();
        expected.extend(sample_contacts());
        assert_eq!(book.contacts(), expected.as_slice());
    }
}
