//! Fixed fallback views.
//!
//! Both pages are fully static; nothing request-derived ever reaches
//! their bodies.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "500.html")]
struct InternalTemplate;

/// The fixed not-found view with its matching status code.
pub(crate) fn not_found_page() -> Response {
    let body = NotFoundTemplate
        .render()
        .unwrap_or_else(|_| "Not Found".to_string());
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}

/// The fixed internal-error view with its matching status code.
pub(crate) fn internal_page() -> Response {
    let body = InternalTemplate
        .render()
        .unwrap_or_else(|_| "Internal Server Error".to_string());
    (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
}

/// Router fallback for unmapped paths.
pub(crate) async fn fallback() -> Response {
    not_found_page()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_404_status() {
        assert_eq!(not_found_page().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_has_500_status() {
        assert_eq!(
            internal_page().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
