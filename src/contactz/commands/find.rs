use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

use super::helpers::contact;

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = contact(book, name)?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}
