use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    book: &mut ContactBook<S>,
    name: &str,
    phone: &str,
    category: &str,
    region: &str,
) -> Result<CmdResult> {
    let contact = book.add(name, phone, category, region)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added ({}): {}",
        book.len(),
        contact.name
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}
