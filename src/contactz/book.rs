//! # Address Book
//!
//! [`AddressBook`] is the only stateful piece of the library: an insertion-ordered
//! mapping from contact name to [`Record`].
//!
//! Order matters twice: listing and pagination walk records in the order they were
//! first added, and search returns matches in that same order. Overwriting a name
//! (adding a second record with the same name) replaces the record but keeps its
//! original position.
//!
//! Lookups are linear. An address book is a human-sized collection and the store
//! reads and writes it whole, so a `Vec` is the right shape here.
//!
//! Persistence is a whole-book snapshot, see [`crate::store`].

use crate::error::Result;
use crate::page::{PageCursor, Pages};
use crate::record::Record;
use crate::store::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing any record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Removes and returns the record. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|pos| self.records.remove(pos))
    }

    /// Case-insensitive match on the name, substring match on any phone.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name().to_lowercase().contains(&query_lower)
                    || r.phones.iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    /// A fresh page iterator starting at the first record.
    pub fn paginate(&self, page_size: usize) -> Result<Pages<'_>> {
        Ok(Pages::new(self, PageCursor::new(page_size)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn slice(&self, offset: usize, len: usize) -> &[Record] {
        let start = offset.min(self.records.len());
        let end = offset.saturating_add(len).min(self.records.len());
        &self.records[start..end]
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write_book(path.as_ref(), self)
    }

    /// Loads a book from `path`. A missing file yields an empty book.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let book = fs::read_book(path)?.unwrap_or_default();
        debug!(path = %path.display(), contacts = book.len(), "address book loaded");
        Ok(book)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
