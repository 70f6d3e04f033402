use anyhow::Result;
use async_trait::async_trait;
use shared::Person;
use sqlx::{sqlite::SqliteRow, Row};
use tracing::debug;

use super::DbConnection;
use crate::storage::PersonStorage;

/// SQLite-backed repository for the `persons` table
#[derive(Clone)]
pub struct SqlitePersonRepository {
    db: DbConnection,
}

impl SqlitePersonRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_person(row: &SqliteRow) -> Result<Person> {
        Ok(Person {
            id: Some(row.try_get("id")?),
            name: row.try_get("name")?,
            birthday: row.try_get("birthday")?,
        })
    }
}

#[async_trait]
impl PersonStorage for SqlitePersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, birthday
            FROM persons
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_person).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, birthday
            FROM persons
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_person).transpose()
    }

    async fn save(&self, person: Person) -> Result<Person> {
        match person.id {
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO persons (name, birthday)
                    VALUES (?, ?)
                    "#,
                )
                .bind(&person.name)
                .bind(person.birthday)
                .execute(self.db.pool())
                .await?;

                let id = result.last_insert_rowid();
                debug!("Inserted person {} with ID: {}", person.name, id);
                Ok(person.with_id(id))
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO persons (id, name, birthday)
                    VALUES (?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        birthday = excluded.birthday
                    "#,
                )
                .bind(id)
                .bind(&person.name)
                .bind(person.birthday)
                .execute(self.db.pool())
                .await?;

                debug!("Saved person {} with ID: {}", person.name, id);
                Ok(person)
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM persons WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
