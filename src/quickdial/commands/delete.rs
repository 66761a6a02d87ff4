use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuickDialError, Result};
use crate::index::DisplayIndex;
use crate::store::DataStore;

pub fn run<S: DataStore>(book: &mut ContactBook<S>, index: DisplayIndex) -> Result<CmdResult> {
    let len = book.len();
    let position = index
        .position()
        .filter(|p| *p < len)
        .ok_or(QuickDialError::Index {
            index: index.0,
            len,
        })?;

    let removed = book.delete(position)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted ({}): {}",
        index, removed.name
    )));
    Ok(result.with_affected_contacts(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_by_display_index() {
        let store = StoreFixture::new().with_contacts(3).build();
        let mut book = ContactBook::open(store).unwrap();

        let result = run(&mut book, DisplayIndex(2)).unwrap();
        assert_eq!(result.affected_contacts[0].name, "Test Contact 2");

        let listed = list::run(&book).unwrap().listed_contacts;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].contact.name, "Test Contact 3");
        assert_eq!(listed[1].index, DisplayIndex(2));
    }

    #[test]
    fn out_of_range_reports_display_index() {
        let store = StoreFixture::new().with_contacts(2).build();
        let mut book = ContactBook::open(store).unwrap();

        let err = run(&mut book, DisplayIndex(3)).unwrap_err();
        assert!(matches!(err, QuickDialError::Index { index: 3, len: 2 }));
        assert!(run(&mut book, DisplayIndex(0)).is_err());
        assert_eq!(book.len(), 2);
    }
}
