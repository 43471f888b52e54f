//! Terminal responses produced by the host itself.
//!
//! # Responsibilities
//! - Serve a resolved pre-rendered page from disk
//! - Redirect missing pages to the fallback route
//! - Give unresolved assets an explicit 404 instead of an empty reply
//!
//! # Design Decisions
//! - Redirects use 302 Found; the fallback page may change between builds
//! - Security headers are added by the outer middleware, not here

use std::path::PathBuf;

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeFile;

/// Stream a file from disk, honouring conditional and range headers.
pub async fn serve_file(path: PathBuf, request: Request) -> Response {
    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Temporary redirect to `target`.
pub fn redirect(target: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
}

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

pub fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
