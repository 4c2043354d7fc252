//! # Contactz Architecture
//!
//! Contactz is a small **UI-agnostic address book library** with a terminal client on
//! top. The library never prints; the binary is the only place that knows about
//! stdin, stdout and exit codes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap options, interactive loop, command dispatch table   │
//! │  - The ONLY place that reads input or writes output         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the book, the store and the session page cursor     │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over AddressBook, no I/O                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (field.rs, record.rs, book.rs, page.rs)             │
//! │  Storage (store/): DataStore, FileStore, InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`field`]: validated values (`Name`, `Phone`, `Birthday`)
//! - [`record`]: one contact and its phone/birthday operations
//! - [`book`]: the insertion-ordered [`book::AddressBook`]
//! - [`page`]: page cursor and page iterator
//! - [`store`]: persistence backends
//! - [`commands`]: per-operation business logic
//! - [`api`]: the facade UI clients talk to
//! - [`config`]: `config.json` handling
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod page;
pub mod record;
pub mod store;
