use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;
use std::path::Path;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<AddressBook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            snapshot: Some(book),
            saves: 0,
        }
    }

    /// How many times `save` was called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn snapshot(&self) -> Option<&AddressBook> {
        self.snapshot.as_ref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.snapshot.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.snapshot = Some(book.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::field::Birthday;
    use crate::record::Record;

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        /// Adds `count` contacts named "Contact 1".."Contact N", each with one phone.
        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record = Record::new(format!("Contact {}", i + 1), None).unwrap();
                record.add_phone(&format!("{:010}", i + 1)).unwrap();
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name, None).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, year: i32, month: u32, day: u32) -> Self {
            let birthday = Birthday::from_ymd(year, month, day).unwrap();
            match self.book.find_mut(name) {
                Some(record) => record.set_birthday(birthday),
                None => self
                    .book
                    .add_record(Record::new(name, Some(birthday)).unwrap()),
            }
            self
        }

        pub fn store(self) -> InMemoryStore {
            InMemoryStore::with_book(self.book)
        }
    }
}
