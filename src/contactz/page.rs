//! Pagination over an [`AddressBook`].
//!
//! [`PageCursor`] is plain data (offset and page size) so it can outlive a borrow of
//! the book: the CLI keeps one across `show_all` / `next` commands while the book is
//! mutated in between. [`Pages`] pairs a cursor with a borrowed book for the common
//! one-shot walk.

use crate::book::AddressBook;
use crate::error::{ContactzError, Result};
use crate::record::Record;

/// One page: `(name, record)` pairs in insertion order.
pub type Page<'a> = Vec<(&'a str, &'a Record)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    offset: usize,
    page_size: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(ContactzError::invalid("page size", "0"));
        }
        Ok(Self {
            offset: 0,
            page_size,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Returns the page at the cursor and advances past it, or `None` once the book is
    /// exhausted. Never yields an empty page.
    pub fn next_page<'a>(&mut self, book: &'a AddressBook) -> Option<Page<'a>> {
        let records = book.slice(self.offset, self.page_size);
        if records.is_empty() {
            return None;
        }
        self.offset += records.len();
        Some(records.iter().map(|r| (r.name(), r)).collect())
    }
}

/// Lazy iterator of pages. Created by [`AddressBook::paginate`].
pub struct Pages<'a> {
    book: &'a AddressBook,
    cursor: PageCursor,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(book: &'a AddressBook, cursor: PageCursor) -> Self {
        Self { book, cursor }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_page(self.book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_of(n: usize) -> AddressBook {
        (0..n)
            .map(|i| Record::new(format!("Contact {}", i + 1), None).unwrap())
            .collect()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(PageCursor::new(0).is_err());
        assert!(book_of(3).paginate(0).is_err());
    }

    #[test]
    fn pages_split_with_short_tail() {
        let book = book_of(7);
        let sizes: Vec<usize> = book.paginate(3).unwrap().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }

    #[test]
    fn exact_multiple_has_full_last_page() {
        let book = book_of(6);
        let sizes: Vec<usize> = book.paginate(3).unwrap().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![3, 3]);
    }

    #[test]
    fn empty_book_has_no_pages() {
        assert_eq!(AddressBook::new().paginate(5).unwrap().count(), 0);
    }

    #[test]
    fn paginate_restarts_from_zero() {
        let book = book_of(4);
        let mut first = book.paginate(2).unwrap();
        first.next();

        let mut second = book.paginate(2).unwrap();
        let page = second.next().unwrap();
        assert_eq!(page[0].0, "Contact 1");
    }

    #[test]
    fn cursor_survives_mutation_between_pages() {
        let mut book = book_of(3);
        let mut cursor = PageCursor::new(2).unwrap();

        assert_eq!(cursor.next_page(&book).unwrap().len(), 2);
        book.add_record(Record::new("Late", None).unwrap());
        let names: Vec<&str> = cursor
            .next_page(&book)
            .unwrap()
            .iter()
            .map(|(n, _)| *n)
            .collect();
        assert_eq!(names, vec!["Contact 3", "Late"]);
        assert!(cursor.next_page(&book).is_none());

        cursor.reset();
        assert_eq!(cursor.offset(), 0);
    }
}
