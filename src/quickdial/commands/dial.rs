use crate::book::ContactBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::dialer::Dialer;
use crate::error::Result;
use crate::index::QuickDialIndex;
use crate::store::DataStore;

/// Looks up `digits` in a freshly built quick-dial index and, when a dialer is
/// given, calls the match. The hit is returned in `quick_dial`; a miss is a
/// warning, not an error.
pub fn run<S: DataStore>(
    book: &ContactBook<S>,
    digits: &str,
    dialer: Option<&mut dyn Dialer>,
) -> Result<CmdResult> {
    let index = QuickDialIndex::build(book.contacts());
    let mut result = CmdResult::default();

    let Some(entry) = index.lookup(digits).cloned() else {
        tracing::debug!(digits, "quick-dial miss");
        result.add_message(CmdMessage::warning("No contact found with those digits"));
        return Ok(result);
    };

    tracing::debug!(digits, name = %entry.name, "quick-dial hit");
    if let Some(dialer) = dialer {
        dialer.dial(&entry.full_number)?;
        result.add_message(CmdMessage::info(format!("Calling {}", entry.name)));
    }

    Ok(result.with_quick_dial(entry))
}
