use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

use super::helpers::contact_mut;

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    record.add_phone(phone)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phone {} added to {}",
            phone,
            record.name()
        )))
        .with_affected_records(vec![record.clone()]))
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    if !record.remove_phone(phone) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} has no phone {}",
            record.name(),
            phone
        ))));
    }
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phone {} removed from {}",
            phone,
            record.name()
        )))
        .with_affected_records(vec![record.clone()]))
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = contact_mut(book, name)?;
    record.edit_phone(old, new)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Phone for {} changed: {} -> {}",
            record.name(),
            old,
            new
        )))
        .with_affected_records(vec![record.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::ContactzError;
    use crate::store::memory::fixtures::BookFixture;

    fn alice() -> AddressBook {
        BookFixture::new()
            .with_contact("Alice", &["1234567890"])
            .book
    }

    fn phones_of(book: &AddressBook, name: &str) -> Vec<String> {
        book.find(name)
            .unwrap()
            .phones
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn add_then_edit() {
        let mut book = alice();
        add(&mut book, "Alice", "0987654321").unwrap();
        edit(&mut book, "Alice", "1234567890", "1112223333").unwrap();

        assert_eq!(phones_of(&book, "Alice"), vec!["1112223333", "0987654321"]);
    }

    #[test]
    fn unknown_contact_is_not_found() {
        let mut book = alice();
        assert!(matches!(
            add(&mut book, "Bob", "0987654321"),
            Err(ContactzError::NotFound(_))
        ));
    }

    #[test]
    fn edit_missing_phone_is_not_found_and_unchanged() {
        let mut book = alice();
        assert!(matches!(
            edit(&mut book, "Alice", "0000000000", "1112223333"),
            Err(ContactzError::NotFound(_))
        ));
        assert_eq!(phones_of(&book, "Alice"), vec!["1234567890"]);
    }

    #[test]
    fn remove_reports_absence() {
        let mut book = alice();
        let result = remove(&mut book, "Alice", "0000000000").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);

        let result = remove(&mut book, "Alice", "1234567890").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(phones_of(&book, "Alice").is_empty());
    }
}
