//! # Quickdial Architecture
//!
//! Quickdial is a **UI-agnostic contact book library** with a quick-dial lookup:
//! type the last three digits of a number, get the contact. The CLI shipped in
//! this package is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the ContactBook          │
//! │  - Normalizes inputs (display index text → DisplayIndex)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! │  - No I/O assumptions                                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book + Storage (book.rs, store/, table.rs)                 │
//! │  - ContactBook: ordered contacts, persisted on every change │
//! │  - DataStore trait: FileStore (CSV), InMemoryStore (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numbers and Keys
//!
//! Phone numbers are stored exactly as entered. Everything that needs digits
//! ([`phone::normalize`]) or a quick-dial key ([`phone::suffix`]) derives them
//! on the fly, and [`index::QuickDialIndex`] is rebuilt from the book on every
//! lookup. There is no cached state that can go stale.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward code takes plain arguments, returns `Result<CmdResult>`,
//! never prints and never exits. The only side effects are the backing table,
//! `config.json`, and a [`dialer::Dialer`] when a caller hands one in.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): business logic against `InMemoryStore`.
//! 2. **API** (`api.rs`): dispatch and argument plumbing.
//! 3. **CLI** (`cli/`, `tests/`): rendering of canned results, and the binary
//!    end to end with a temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`book`]: The contact book and its persistence rules
//! - [`store`]: Storage abstraction and implementations
//! - [`table`]: CSV encoding with header checks
//! - [`model`]: `Contact` and the seed rows
//! - [`phone`]: Digit normalization and suffix keys
//! - [`validation`]: Phone number validation per region
//! - [`index`]: Display numbering and the quick-dial index
//! - [`dialer`]: Handing a number to the system to call
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod dialer;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod phone;
pub mod store;
pub mod table;
pub mod validation;
