use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_contacts, DisplayContact};
use crate::model::Contact;
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Name,
    Category,
}

impl SearchField {
    fn value<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            SearchField::Name => &contact.name,
            SearchField::Category => &contact.category,
        }
    }
}

/// Case-insensitive substring match on one field, in store order.
pub fn matches(contacts: &[Contact], term: &str, field: SearchField) -> Vec<DisplayContact> {
    let term_lower = term.to_lowercase();
    index_contacts(contacts)
        .into_iter()
        .filter(|dc| field.value(&dc.contact).to_lowercase().contains(&term_lower))
        .collect()
}

pub fn run<S: DataStore>(book: &ContactBook<S>, term: &str, field: SearchField) -> Result<CmdResult> {
    let found = matches(book.contacts(), term, field);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::warning("No matches found"));
    }
    Ok(result.with_listed_contacts(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    fn john() -> Vec<Contact> {
        vec![Contact::new("John Doe", "+1234567890", "Family")]
    }

    #[test]
    fn finds_category_case_insensitively() {
        let found = matches(&john(), "fam", SearchField::Category);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].contact.name, "John Doe");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(matches(&john(), "xyz", SearchField::Category).is_empty());
    }

    #[test]
    fn field_choice_matters() {
        assert!(matches(&john(), "john", SearchField::Category).is_empty());
        assert_eq!(matches(&john(), "JOHN", SearchField::Name).len(), 1);
    }

    #[test]
    fn keeps_store_order_and_display_indexes() {
        let contacts = vec![
            Contact::new("Ann", "1", "Work"),
            Contact::new("Bob", "2", "Family"),
            Contact::new("Cy", "3", "Coworker"),
        ];
        let found = matches(&contacts, "WORK", SearchField::Category);
        let indexes: Vec<DisplayIndex> = found.iter().map(|dc| dc.index).collect();
        assert_eq!(indexes, vec![DisplayIndex(1), DisplayIndex(3)]);
    }

    #[test]
    fn unicode_case_folding() {
        let contacts = vec![Contact::new("Ärzte Notdienst", "112", "Other")];
        assert_eq!(matches(&contacts, "ärz", SearchField::Name).len(), 1);
    }

    #[test]
    fn empty_term_matches_everything() {
        let store = StoreFixture::new().with_contacts(3).build();
        let book = ContactBook::open(store).unwrap();
        let result = run(&book, "", SearchField::Name).unwrap();
        assert_eq!(result.listed_contacts.len(), 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn run_warns_on_empty_result() {
        let store = StoreFixture::new().with_contacts(1).build();
        let book = ContactBook::open(store).unwrap();
        let result = run(&book, "nobody", SearchField::Name).unwrap();
        assert!(result.listed_contacts.is_empty());
        assert_eq!(result.messages[0].content, "No matches found");
    }
}
