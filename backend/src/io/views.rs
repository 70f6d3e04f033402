//! HTML views rendered for the person pages.
//!
//! Each public function is one named view and takes its view context as
//! arguments. Interpolated values are escaped by `maud`.

use maud::{html, Markup, DOCTYPE};
use shared::Person;

use super::rest::person_pages::{ADD_PATH, LIST_PATH, SAVE_PATH};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                h1 { (title) }
                (content)
            }
        }
    }
}

fn person_fields(person: Option<&Person>) -> Markup {
    let name = person.map(|p| p.name.as_str()).unwrap_or_default();
    let birthday = person
        .map(|p| p.birthday.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    html! {
        label for="name" { "Name" }
        input type="text" id="name" name="name" value=(name) required;
        label for="birthday" { "Birthday" }
        input type="date" id="birthday" name="birthday" value=(birthday) required;
    }
}

/// List view: every person with edit and delete links
pub fn people(person_list: &[Person]) -> Markup {
    layout(
        "People",
        html! {
            p { a href=(ADD_PATH) { "Add person" } }
            table {
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Birthday" }
                        th {}
                    }
                }
                tbody {
                    @if person_list.is_empty() {
                        tr { td colspan="4" { "No people yet" } }
                    }
                    @for person in person_list {
                        @if let Some(id) = person.id {
                            tr {
                                td { (id) }
                                td { (person.name) }
                                td { (person.birthday.format(DATE_FORMAT).to_string()) }
                                td {
                                    a href=(format!("/edit.html/{}", id)) { "Edit" }
                                    " "
                                    a href=(format!("/delete.html/{}", id)) { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Empty form for a new person
pub fn add() -> Markup {
    layout(
        "Add person",
        html! {
            form method="post" action=(SAVE_PATH) {
                (person_fields(None))
                button type="submit" { "Save" }
            }
            p { a href=(LIST_PATH) { "Back to list" } }
        },
    )
}

/// Edit form pre-filled with `person`, submitting to the update path for `id`
pub fn update(id: i64, person: &Person) -> Markup {
    layout(
        "Edit person",
        html! {
            form method="post" action=(format!("/update.html/{}", id)) {
                input type="hidden" name="id" value=(id);
                (person_fields(Some(person)))
                button type="submit" { "Update" }
            }
            p { a href=(LIST_PATH) { "Back to list" } }
        },
    )
}
