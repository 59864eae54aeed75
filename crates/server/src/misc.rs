//! Small demonstration routes: redirects, cookies and parameterized
//! snippets.

use askama::Template;
use axum::{
    extract::Path,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{ServerError, errors};

/// The one cookie `/cookies` hands out, byte-for-byte the same on every
/// call. It is a canned literal, not a freshly minted session token.
const CANNED_COOKIE: &str = "session=.eJwVyEEKgzAQRuG7_OssmkmCo3fwBFJkYmZcFFMwbkS8ey28zfcuLG23-fh-tGIAJSZeklrvU-ZYOm8k2uUSKLy8sOVorMHgUOSQLE0xXLfDpq3J-mBCpEDxH94OVbZnYpRaT9w_Ng8g.Y3Gh_g.UhGiOcyj1v5lE9IF669Y6SeqZg8";

#[derive(Template)]
#[template(path = "user.html")]
struct UserTemplate {
    name: String,
}

#[derive(Template)]
#[template(path = "path.html")]
struct PathTemplate {
    subpath: String,
}

/// Greets unless the segment parses as a decimal id, for which there is
/// nothing to serve.
pub async fn abortme(Path(id): Path<String>) -> Response {
    if id.parse::<i64>().is_ok() {
        return errors::not_found_page();
    }

    Html("<h1>Hello World!</h1>").into_response()
}

pub async fn uturn() -> Redirect {
    Redirect::to("https://www.google.com")
}

pub async fn cookies() -> Response {
    (
        [(header::SET_COOKIE, CANNED_COOKIE)],
        Html("<h1>I am giving you a cookie</h1>"),
    )
        .into_response()
}

pub async fn user(Path(name): Path<String>) -> Result<Response, ServerError> {
    let template = UserTemplate { name };
    Ok(Html(template.render()?).into_response())
}

/// Only decimal integers reach the body; anything else gets the
/// not-found view.
pub async fn post_id(Path(id): Path<String>) -> Response {
    match id.parse::<i64>() {
        Ok(id) => format!("Post {id}").into_response(),
        Err(_) => errors::not_found_page(),
    }
}

/// Echoes the whole remainder of the path, markup-escaped by the
/// template layer.
pub async fn subpath(Path(subpath): Path<String>) -> Result<Response, ServerError> {
    let template = PathTemplate { subpath };
    Ok(Html(template.render()?).into_response())
}
