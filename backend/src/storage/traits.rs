//! # Storage Traits
//!
//! The repository abstraction the HTTP layer depends on.

use anyhow::Result;
use async_trait::async_trait;
use shared::Person;

/// Trait defining the interface for person storage operations
///
/// Implementations own all persisted state. Lookups that find nothing are
/// `Ok(None)`/`Ok(false)`, never errors; turning absence into a failure is
/// the caller's decision.
#[async_trait]
pub trait PersonStorage: Send + Sync {
    /// List every person, ordered by id ascending
    async fn find_all(&self) -> Result<Vec<Person>>;

    /// Retrieve a specific person by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Person>>;

    /// Insert or overwrite a person
    ///
    /// A person without an id is inserted and receives a fresh one. A person
    /// with an id replaces the stored row with that id, or is inserted under
    /// it when no such row exists. Returns the persisted record.
    async fn save(&self, person: Person) -> Result<Person>;

    /// Delete a person by ID
    /// Returns true if a row was found and deleted, false otherwise
    async fn delete_by_id(&self, id: i64) -> Result<bool>;
}
