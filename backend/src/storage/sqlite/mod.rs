//! # SQLite Storage Module
//!
//! - **connection.rs** - pool setup and schema creation
//! - **person_repository.rs** - [`PersonStorage`](super::PersonStorage) over the `persons` table

pub mod connection;
pub mod person_repository;

pub use connection::DbConnection;
pub use person_repository::SqlitePersonRepository;
