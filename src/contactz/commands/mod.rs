//! # Commands
//!
//! One module per user-facing operation. Commands take the [`AddressBook`] and plain
//! Rust arguments and return a [`CmdResult`]; they never print and never touch the
//! store. Saving is the API's job.
//!
//! [`AddressBook`]: crate::book::AddressBook

use crate::record::Record;

pub mod add;
pub mod birthday;
pub mod delete;
pub mod find;
pub mod helpers;
pub mod list;
pub mod phones;
pub mod search;
pub mod upcoming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Position of a listed page within the book, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// A contact with the days left until its birthday.
#[derive(Debug, Clone)]
pub struct BirthdayEntry {
    pub record: Record,
    pub days: i64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub page: Option<PageInfo>,
    pub birthdays: Vec<BirthdayEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<BirthdayEntry>) -> Self {
        self.birthdays = birthdays;
        self
    }
}
