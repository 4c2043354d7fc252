use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactzError, Result};

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ContactzError::MissingArgument("query"));
    }

    let listed: Vec<_> = book.search(query).into_iter().cloned().collect();
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match '{}'", query)));
    }
    Ok(result.with_listed_records(listed))
}
