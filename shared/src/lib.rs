use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single person record, mapped one-to-one to a row of the `persons` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Storage-assigned identifier; `None` until the record has been saved
    pub id: Option<i64>,
    pub name: String,
    /// Calendar date, serialized as `YYYY-MM-DD`
    pub birthday: NaiveDate,
}

impl Person {
    /// Build a person that has not been persisted yet
    pub fn new(name: impl Into<String>, birthday: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            birthday,
        }
    }

    /// Same record with the id replaced
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Url-encoded body submitted by the add and edit forms.
///
/// `id` is accepted so that a stale or tampered hidden field does not reject
/// the request, but callers decide whether it is honoured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonForm {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub birthday: NaiveDate,
}

impl From<PersonForm> for Person {
    fn from(form: PersonForm) -> Self {
        Person {
            id: form.id,
            name: form.name,
            birthday: form.birthday,
        }
    }
}
