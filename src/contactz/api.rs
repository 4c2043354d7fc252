//! # API Facade
//!
//! [`ContactzApi`] is the single entry point for UI clients. It owns the
//! [`AddressBook`], the [`DataStore`] it came from, and the session paging cursor
//! behind `show_all` / `next`.
//!
//! The facade dispatches to `commands/*.rs` and returns their [`CmdResult`]. It does
//! not print and does not decide when to save: clients call [`ContactzApi::save`]
//! explicitly (the CLI does so on `save` and on exit).
//!
//! Generic over the store:
//! - Production: `ContactzApi<FileStore>`
//! - Testing: `ContactzApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::page::PageCursor;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use tracing::debug;

pub struct ContactzApi<S: DataStore> {
    store: S,
    book: AddressBook,
    cursor: PageCursor,
    dirty: bool,
}

impl<S: DataStore> ContactzApi<S> {
    /// Loads the book from `store`. `page_size` is the default for `show_all`.
    pub fn open(store: S, page_size: usize) -> Result<Self> {
        let book = store.load()?;
        let cursor = PageCursor::new(page_size)?;
        debug!(contacts = book.len(), page_size, "api opened");
        Ok(Self {
            store,
            book,
            cursor,
            dirty: false,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the book changed since it was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.book, name, phone, birthday)?;
        self.touched(&result);
        Ok(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.book, name)?;
        self.touched(&result);
        Ok(result)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        let result = commands::phones::add(&mut self.book, name, phone)?;
        self.touched(&result);
        Ok(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        let result = commands::phones::remove(&mut self.book, name, phone)?;
        self.touched(&result);
        Ok(result)
    }

    pub fn edit_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        let result = commands::phones::edit(&mut self.book, name, old, new)?;
        self.touched(&result);
        Ok(result)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<commands::CmdResult> {
        let result = commands::birthday::set(&mut self.book, name, date)?;
        self.touched(&result);
        Ok(result)
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::days(&self.book, name, today())
    }

    pub fn upcoming_birthdays(&self, within_days: i64) -> Result<commands::CmdResult> {
        commands::upcoming::run(&self.book, today(), within_days)
    }

    pub fn find(&self, name: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.book, name)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn list_all(&self) -> Result<commands::CmdResult> {
        commands::list::all(&self.book)
    }

    /// Restarts paging from the first contact and returns the first page.
    pub fn show_all(&mut self, page_size: Option<usize>) -> Result<commands::CmdResult> {
        self.cursor = match page_size {
            Some(size) => PageCursor::new(size)?,
            None => PageCursor::new(self.cursor.page_size())?,
        };
        commands::list::page(&self.book, &mut self.cursor)
    }

    pub fn next_page(&mut self) -> Result<commands::CmdResult> {
        commands::list::page(&self.book, &mut self.cursor)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        self.store.save(&self.book)?;
        self.dirty = false;
        let message = match self.store.location() {
            Some(path) => format!("Address book saved to {}", path.display()),
            None => "Address book saved".to_string(),
        };
        Ok(commands::CmdResult::default().with_message(commands::CmdMessage::info(message)))
    }

    fn touched(&mut self, result: &commands::CmdResult) {
        if !result.affected_records.is_empty() {
            self.dirty = true;
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use crate::commands::{BirthdayEntry, CmdMessage, CmdResult, MessageLevel, PageInfo};
