use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::require_name;

/// Deletes a contact. Deleting a name that does not exist changes nothing.
pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let name = require_name(name)?;
    let result = match book.delete(name) {
        Some(record) => CmdResult::default()
            .with_message(CmdMessage::success(format!("Contact deleted: {}", name)))
            .with_affected_records(vec![record]),
        None => CmdResult::default()
            .with_message(CmdMessage::warning(format!("Contact does not exist: {}", name))),
    };
    Ok(result)
}
