//! # Storage Module
//!
//! Persistence for person records.
//!
//! The rest of the server talks to storage only through the [`PersonStorage`]
//! trait, so the backing store can be swapped without touching the handlers.
//!
//! ## Current Implementation
//!
//! - **SQLite** via SQLx: a single `persons` table keyed by an
//!   auto-incrementing integer id
//!
//! Each operation is a single statement. There is no caching and no
//! transaction spanning more than one call.

pub mod sqlite;
pub mod traits;

pub use sqlite::{DbConnection, SqlitePersonRepository};
pub use traits::PersonStorage;
