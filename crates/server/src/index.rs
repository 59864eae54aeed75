//! Index page: per-session name and message capture.

use askama::Template;
use axum::{
    Form,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};

use crate::{
    ServerError,
    forms::{FieldErrors, NameMessageForm},
    session::SessionState,
};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    flashes: Vec<String>,
    name: Option<String>,
    messages: Vec<String>,
    form_name: String,
    form_message: String,
    name_error: Option<String>,
    message_error: Option<String>,
    current_time: DateTime<Utc>,
}

pub async fn get(session: SessionState) -> Result<Response, ServerError> {
    session.reset_scratch().await?;
    render(&session, &NameMessageForm::default(), None).await
}

pub async fn post(
    session: SessionState,
    Form(form): Form<NameMessageForm>,
) -> Result<Response, ServerError> {
    session.reset_scratch().await?;

    match form.validate() {
        Ok(valid) => {
            if let Some(old_name) = session.name().await? {
                if old_name != valid.name {
                    session
                        .push_flash("Looks like you have changed your name!")
                        .await?;
                }
            }
            session.set_name(&valid.name).await?;
            session.push_message(&valid.message).await?;

            // Redirect-after-POST: a reload of the result page must not
            // resubmit the form.
            Ok(Redirect::to("/").into_response())
        }
        Err(errors) => render(&session, &form, Some(&errors)).await,
    }
}

async fn render(
    session: &SessionState,
    form: &NameMessageForm,
    errors: Option<&FieldErrors>,
) -> Result<Response, ServerError> {
    let template = IndexTemplate {
        flashes: session.take_flashes().await?,
        name: session.name().await?,
        messages: session.messages().await?,
        form_name: form.name.clone(),
        form_message: form.message.clone(),
        name_error: field_error(errors, "name"),
        message_error: field_error(errors, "message"),
        current_time: Utc::now(),
    };

    // The page has always shipped its content under a not-found status.
    // Kept on purpose; see DESIGN.md.
    Ok((StatusCode::NOT_FOUND, Html(template.render()?)).into_response())
}

fn field_error(errors: Option<&FieldErrors>, field: &str) -> Option<String> {
    errors
        .and_then(|errors| errors.get(field))
        .map(str::to_owned)
}
