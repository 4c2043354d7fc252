use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, PageInfo};
use crate::error::Result;
use crate::page::PageCursor;

pub fn all(book: &AddressBook) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if book.is_empty() {
        result.add_message(CmdMessage::info("Address book is empty."));
    }
    Ok(result.with_listed_records(book.iter().cloned().collect()))
}

/// The page under `cursor`, advancing it.
pub fn page(book: &AddressBook, cursor: &mut PageCursor) -> Result<CmdResult> {
    let first = cursor.offset() + 1;
    let Some(page) = cursor.next_page(book) else {
        let message = if book.is_empty() {
            "Address book is empty."
        } else {
            "No more contacts."
        };
        return Ok(CmdResult::default().with_message(CmdMessage::info(message)));
    };

    let listed: Vec<_> = page.into_iter().map(|(_, record)| record.clone()).collect();
    let info = PageInfo {
        first,
        last: first + listed.len() - 1,
        total: book.len(),
    };
    Ok(CmdResult::default()
        .with_listed_records(listed)
        .with_page(info))
}
