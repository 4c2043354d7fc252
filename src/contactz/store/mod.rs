//! # Storage Layer
//!
//! The [`DataStore`] trait hides where an [`AddressBook`] snapshot lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production, one JSON file holding the whole book
//! - [`memory::InMemoryStore`]: tests, keeps the last saved snapshot in memory
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "contacts": [
//!     { "name": "Alice", "phones": ["1234567890"], "birthday": "1990-05-17" },
//!     { "name": "Bob", "phones": [], "birthday": null }
//!   ]
//! }
//! ```
//!
//! Contacts are a list rather than a JSON object so that insertion order survives a
//! round trip. The name inside each entry is the key.
//!
//! Snapshots are always read and written whole. There is no locking: one user, one
//! process.

use crate::book::AddressBook;
use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the stored book. An absent store yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored snapshot with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Where the snapshot lives, for stores backed by a file.
    fn location(&self) -> Option<&Path>;
}
