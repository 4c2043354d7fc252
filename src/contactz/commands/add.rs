use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::field::{Birthday, Phone};
use crate::record::Record;

use super::helpers::require_name;

/// Adds a contact, or extends an existing one with a phone and/or birthday.
///
/// Everything is validated before the book is touched.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phone: Option<&str>,
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let name = require_name(name)?;
    let phone = phone.map(Phone::new).transpose()?;
    let birthday = birthday.map(str::parse::<Birthday>).transpose()?;

    let (record, message) = match book.find_mut(name) {
        Some(record) => {
            apply(record, phone, birthday);
            (record.clone(), format!("Contact updated: {}", name))
        }
        None => {
            let mut record = Record::new(name, None)?;
            apply(&mut record, phone, birthday);
            book.add_record(record.clone());
            (record, format!("Contact added: {}", name))
        }
    };

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(vec![record]))
}

fn apply(record: &mut Record, phone: Option<Phone>, birthday: Option<Birthday>) {
    if let Some(phone) = phone {
        record.phones.push(phone);
    }
    if let Some(birthday) = birthday {
        record.set_birthday(birthday);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactzError;

    #[test]
    fn adds_new_contact() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "Alice", Some("1234567890"), None).unwrap();

        assert_eq!(result.messages[0].content, "Contact added: Alice");
        assert_eq!(book.find("Alice").unwrap().phones.len(), 1);
    }

    #[test]
    fn extends_existing_contact() {
        let mut book = AddressBook::new();
        run(&mut book, "Alice", Some("1234567890"), None).unwrap();
        let result = run(&mut book, "Alice", Some("0987654321"), Some("1990-05-17")).unwrap();

        assert_eq!(result.messages[0].content, "Contact updated: Alice");
        let alice = book.find("Alice").unwrap();
        assert_eq!(alice.phones.len(), 2);
        assert!(alice.birthday.is_some());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn name_only_creates_empty_contact() {
        let mut book = AddressBook::new();
        run(&mut book, "Bob", None, None).unwrap();
        assert!(book.find("Bob").unwrap().phones.is_empty());
    }

    #[test]
    fn rejects_blank_name() {
        let mut book = AddressBook::new();
        assert!(matches!(
            run(&mut book, "  ", None, None),
            Err(ContactzError::MissingArgument("name"))
        ));
    }

    #[test]
    fn invalid_input_does_not_create_contact() {
        let mut book = AddressBook::new();
        assert!(run(&mut book, "Alice", Some("12345"), None).is_err());
        assert!(run(&mut book, "Alice", Some("1234567890"), Some("2023-02-30")).is_err());
        assert!(book.is_empty());
    }
}
