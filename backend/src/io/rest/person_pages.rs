//! # Person Pages
//!
//! Server-rendered endpoints for listing, adding, editing and deleting people.
//! Reads render a view; every mutation answers with a redirect to the list.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use shared::{Person, PersonForm};
use tracing::{info, warn};

use crate::io::{error::AppError, views, AppState};

pub const LIST_PATH: &str = "/people.html";
pub const ADD_PATH: &str = "/add.html";
pub const SAVE_PATH: &str = "/save.html";

/// Routes for the person pages, to be given an [`AppState`]
pub fn router() -> Router<AppState> {
    Router::new()
        .route(LIST_PATH, get(show_persons))
        .route(ADD_PATH, get(show_add_person_form))
        .route(SAVE_PATH, post(save_person))
        .route("/edit.html/:id", get(show_edit_person_form))
        .route("/update.html/:id", post(update_person))
        .route("/delete.html/:id", get(delete_person))
}

fn redirect_to_list() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, LIST_PATH)]).into_response()
}

/// List every person
pub async fn show_persons(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    info!("GET {}", LIST_PATH);

    let person_list = state.person_repository.find_all().await?;
    info!("Found {} people", person_list.len());

    Ok(Html(views::people(&person_list).into_string()))
}

/// Empty form for a new person
pub async fn show_add_person_form() -> Html<String> {
    info!("GET {}", ADD_PATH);
    Html(views::add().into_string())
}

/// Create a person from the submitted form
pub async fn save_person(
    State(state): State<AppState>,
    Form(form): Form<PersonForm>,
) -> Result<Response, AppError> {
    info!("POST {} - request: {:?}", SAVE_PATH, form);

    // Storage always assigns the id of a new record
    let person = Person {
        id: None,
        ..Person::from(form)
    };
    let saved = state.person_repository.save(person).await?;
    info!("Created person: {} with ID: {:?}", saved.name, saved.id);

    Ok(redirect_to_list())
}

/// Edit form for an existing person
pub async fn show_edit_person_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    info!("GET /edit.html/{}", id);

    let person = state
        .person_repository
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(id))?;

    Ok(Html(views::update(id, &person).into_string()))
}

/// Overwrite a person with the submitted form
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<PersonForm>,
) -> Result<Response, AppError> {
    info!("POST /update.html/{} - request: {:?}", id, form);

    if form.id.is_some_and(|body_id| body_id != id) {
        warn!("Ignoring body id {:?} in favour of path id {}", form.id, id);
    }

    // The path id is authoritative; the body id may be missing or tampered with
    let person = Person::from(form).with_id(id);
    state.person_repository.save(person).await?;
    info!("Updated person with ID: {}", id);

    Ok(redirect_to_list())
}

/// Delete a person; unknown ids are a no-op
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    info!("GET /delete.html/{}", id);

    if state.person_repository.delete_by_id(id).await? {
        info!("Deleted person with ID: {}", id);
    } else {
        warn!("Delete requested for unknown person: {}", id);
    }

    Ok(redirect_to_list())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, PersonStorage, SqlitePersonRepository};
    use axum::{
        body::Body,
        http::{Method, Request},
    };
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tower::util::ServiceExt; // for `oneshot`

    struct TestApp {
        router: Router,
        repository: Arc<SqlitePersonRepository>,
    }

    async fn setup_test_app() -> TestApp {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repository = Arc::new(SqlitePersonRepository::new(db));
        let state = AppState::new(repository.clone());

        TestApp {
            router: router().with_state(state),
            repository,
        }
    }

    async fn get(app: &TestApp, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        send(app, request).await
    }

    async fn post_form(app: &TestApp, uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, String) {
        let response = app.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        if status == StatusCode::FOUND {
            let location = response.headers()[header::LOCATION].to_str().unwrap();
            assert_eq!(location, LIST_PATH);
        }

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_list_on_empty_table() {
        let app = setup_test_app().await;

        let (status, body) = get(&app, "/people.html").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No people yet"));
    }

    #[tokio::test]
    async fn test_show_add_form() {
        let app = setup_test_app().await;

        let (status, body) = get(&app, "/add.html").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("action=\"/save.html\""));
    }

    #[tokio::test]
    async fn test_create_redirects_and_assigns_id() {
        let app = setup_test_app().await;

        let (status, _) = post_form(&app, "/save.html", "name=Alice&birthday=1990-01-01").await;
        assert_eq!(status, StatusCode::FOUND);

        let people = app.repository.find_all().await.unwrap();
        assert_eq!(people.len(), 1);
        assert!(people[0].id.is_some());
        assert_eq!(people[0].name, "Alice");
        assert_eq!(people[0].birthday, date(1990, 1, 1));
    }

    #[tokio::test]
    async fn test_create_ignores_body_id() {
        let app = setup_test_app().await;
        let existing = app
            .repository
            .save(Person::new("Alice", date(1990, 1, 1)))
            .await
            .unwrap();
        let existing_id = existing.id.unwrap();

        let body = format!("id={}&name=Mallory&birthday=1970-01-01", existing_id);
        let (status, _) = post_form(&app, "/save.html", &body).await;
        assert_eq!(status, StatusCode::FOUND);

        let people = app.repository.find_all().await.unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0], existing);
        assert_ne!(people[1].id, Some(existing_id));
        assert_eq!(people[1].name, "Mallory");
    }

    #[tokio::test]
    async fn test_create_with_unparsable_birthday_is_rejected() {
        let app = setup_test_app().await;

        let (status, _) = post_form(&app, "/save.html", "name=Alice&birthday=yesterday").await;

        assert!(status.is_client_error());
        assert!(app.repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edit_form_is_prefilled() {
        let app = setup_test_app().await;
        let saved = app
            .repository
            .save(Person::new("Alice", date(1990, 1, 1)))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        let (status, body) = get(&app, &format!("/edit.html/{}", id)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("value=\"Alice\""));
        assert!(body.contains("value=\"1990-01-01\""));
        assert!(body.contains(&format!("action=\"/update.html/{}\"", id)));
    }

    #[tokio::test]
    async fn test_edit_nonexistent_person_is_not_found() {
        let app = setup_test_app().await;

        let (status, body) = get(&app, "/edit.html/999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("<form"));
    }

    #[tokio::test]
    async fn test_update_uses_path_id_over_body_id() {
        let app = setup_test_app().await;
        let target = app.repository.save(Person::new("Alice", date(1990, 1, 1))).await.unwrap();
        let other = app.repository.save(Person::new("Bob", date(1985, 3, 14))).await.unwrap();
        let target_id = target.id.unwrap();

        let body = format!(
            "id={}&name=Alicia&birthday=1990-01-02",
            other.id.unwrap()
        );
        let (status, _) = post_form(&app, &format!("/update.html/{}", target_id), &body).await;
        assert_eq!(status, StatusCode::FOUND);

        let updated = app.repository.find_by_id(target_id).await.unwrap();
        assert_eq!(
            updated,
            Some(Person::new("Alicia", date(1990, 1, 2)).with_id(target_id))
        );
        let untouched = app.repository.find_by_id(other.id.unwrap()).await.unwrap();
        assert_eq!(untouched, Some(other));
    }

    #[tokio::test]
    async fn test_update_without_body_id() {
        let app = setup_test_app().await;
        let saved = app.repository.save(Person::new("Alice", date(1990, 1, 1))).await.unwrap();
        let id = saved.id.unwrap();

        let (status, _) = post_form(
            &app,
            &format!("/update.html/{}", id),
            "name=Alicia&birthday=1990-01-01",
        )
        .await;
        assert_eq!(status, StatusCode::FOUND);

        let people = app.repository.find_all().await.unwrap();
        assert_eq!(people, vec![Person::new("Alicia", date(1990, 1, 1)).with_id(id)]);
    }

    #[tokio::test]
    async fn test_delete_removes_person() {
        let app = setup_test_app().await;
        let saved = app.repository.save(Person::new("Alice", date(1990, 1, 1))).await.unwrap();
        let id = saved.id.unwrap();

        let (status, _) = get(&app, &format!("/delete.html/{}", id)).await;
        assert_eq!(status, StatusCode::FOUND);

        assert!(app.repository.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_person_redirects() {
        let app = setup_test_app().await;

        let (status, _) = get(&app, "/delete.html/999").await;

        assert_eq!(status, StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let app = setup_test_app().await;

        let (status, _) = get(&app, "/edit.html/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_edit_update_delete_flow() {
        let app = setup_test_app().await;

        let (status, _) = post_form(&app, "/save.html", "name=Alice&birthday=1990-01-01").await;
        assert_eq!(status, StatusCode::FOUND);

        let (_, list) = get(&app, "/people.html").await;
        assert!(list.contains("<td>Alice</td>"));
        assert!(list.contains("<td>1990-01-01</td>"));
        let id = app.repository.find_all().await.unwrap()[0].id.unwrap();

        let (status, form) = get(&app, &format!("/edit.html/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(form.contains("value=\"Alice\""));

        let (status, _) = post_form(
            &app,
            &format!("/update.html/{}", id),
            "name=Alicia&birthday=1990-01-01",
        )
        .await;
        assert_eq!(status, StatusCode::FOUND);

        let (_, list) = get(&app, "/people.html").await;
        assert!(list.contains("<td>Alicia</td>"));
        assert!(list.contains(&format!("<td>{}</td>", id)));
        assert!(!list.contains("<td>Alice</td>"));

        let (status, _) = get(&app, &format!("/delete.html/{}", id)).await;
        assert_eq!(status, StatusCode::FOUND);

        let (_, list) = get(&app, "/people.html").await;
        assert!(!list.contains(&format!("/edit.html/{}\"", id)));
        assert!(list.contains("No people yet"));

        let (status, _) = get(&app, "/edit.html/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
