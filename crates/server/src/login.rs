//! Mock login flow and the gated logged-in view.
//!
//! Credentials are captured verbatim and echoed back on `/loggedin`;
//! there is no password handling worth the name here, by design.

use askama::Template;
use axum::{
    Form,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};

use crate::{
    ServerError, errors,
    forms::LoginForm,
    session::{Credentials, SessionState},
};

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "logged.html")]
struct LoggedTemplate {
    name: Option<String>,
    logged_in_status: bool,
    username: String,
    password: String,
    current_time: DateTime<Utc>,
}

pub async fn get(session: SessionState) -> Result<Response, ServerError> {
    session.reset_scratch().await?;

    let template = LoginTemplate {
        flashes: session.take_flashes().await?,
    };
    Ok(Html(template.render()?).into_response())
}

pub async fn post(
    session: SessionState,
    Form(form): Form<LoginForm>,
) -> Result<Response, ServerError> {
    session.reset_scratch().await?;

    match form.validate() {
        Ok(valid) => {
            session
                .store_login(Credentials {
                    username: valid.username,
                    password: valid.password,
                })
                .await?;
            Ok(Redirect::to("/loggedin").into_response())
        }
        Err(errors) => {
            // A failed login queues the field errors as notices and
            // answers with the not-found view instead of the form.
            // Kept on purpose; see DESIGN.md.
            for notice in errors.notices() {
                session.push_flash(&notice).await?;
            }
            Ok(errors::not_found_page())
        }
    }
}

pub async fn logged_in(session: SessionState) -> Result<Response, ServerError> {
    let Some(scratch) = session.scratch().await? else {
        return Ok(errors::not_found_page());
    };
    let Some(credentials) = scratch.logged_in_status else {
        return Ok(errors::not_found_page());
    };

    let template = LoggedTemplate {
        name: session.name().await?,
        logged_in_status: session.logged_in().await?,
        username: credentials.username,
        password: credentials.password,
        current_time: Utc::now(),
    };

    Ok(Html(template.render()?).into_response())
}
