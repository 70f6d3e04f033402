//! # IO Module
//!
//! The HTTP face of the server: shared handler state, the router, the error
//! type handlers return and the HTML views they render.

pub mod error;
pub mod rest;
pub mod views;

use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::storage::PersonStorage;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub person_repository: Arc<dyn PersonStorage>,
}

impl AppState {
    pub fn new(person_repository: Arc<dyn PersonStorage>) -> Self {
        Self { person_repository }
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(rest::person_pages::router())
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
