//! # People Server
//!
//! A server-rendered CRUD site for person records.
//!
//! ```text
//! IO Layer (router, page handlers, views)
//!     ↓
//! Storage Layer (PersonStorage, SQLite)
//! ```
//!
//! Handlers are stateless; the repository is the only owner of persisted
//! state and is shared through [`io::AppState`].

pub mod config;
pub mod io;
pub mod storage;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub use config::Config;
pub use io::{create_router, AppState};
pub use storage::{DbConnection, PersonStorage, SqlitePersonRepository};

/// Connect storage and build the handler state
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    let person_repository = Arc::new(SqlitePersonRepository::new(db_conn));

    Ok(AppState::new(person_repository))
}
