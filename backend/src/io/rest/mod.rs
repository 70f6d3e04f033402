//! HTTP endpoints, grouped by the pages they serve.

pub mod person_pages;
