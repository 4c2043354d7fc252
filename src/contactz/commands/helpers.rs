use crate::book::AddressBook;
use crate::error::{ContactzError, Result};
use crate::record::Record;

/// Trims `name` and rejects it when empty.
pub fn require_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ContactzError::MissingArgument("name"));
    }
    Ok(name)
}

pub fn contact<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    let name = require_name(name)?;
    book.find(name)
        .ok_or_else(|| ContactzError::contact_not_found(name))
}

pub fn contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    let name = require_name(name)?;
    book.find_mut(name)
        .ok_or_else(|| ContactzError::contact_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn blank_name_is_missing_argument() {
        assert!(matches!(
            require_name("   "),
            Err(ContactzError::MissingArgument("name"))
        ));
        assert_eq!(require_name("  Alice ").unwrap(), "Alice");
    }

    #[test]
    fn unknown_contact_is_not_found() {
        let book = BookFixture::new().with_contacts(1).book;
        assert!(contact(&book, "Contact 1").is_ok());
        assert!(matches!(
            contact(&book, "Nobody"),
            Err(ContactzError::NotFound(_))
        ));
    }
}
