//! Homepage: username registration and recognition.

use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    ServerError,
    forms::{FieldErrors, NameMessageForm},
    server::ServerState,
    session::SessionState,
};

#[derive(Template)]
#[template(path = "homepage.html")]
struct HomepageTemplate {
    flashes: Vec<String>,
    name: Option<String>,
    known: bool,
    form_name: String,
    form_message: String,
    name_error: Option<String>,
    message_error: Option<String>,
}

pub async fn get(session: SessionState) -> Result<Response, ServerError> {
    render(&session, &NameMessageForm::default(), None).await
}

pub async fn post(
    State(state): State<ServerState>,
    session: SessionState,
    Form(form): Form<NameMessageForm>,
) -> Result<Response, ServerError> {
    match form.validate() {
        Ok(valid) => {
            let (_, created) = state.registry.register(&valid.name).await?;

            if created {
                // A fresh registration re-renders right away so the
                // visitor sees the "new user" state.
                session.set_known(false).await?;
                render(&session, &form, None).await
            } else {
                session.set_known(true).await?;
                session.set_name(&valid.name).await?;
                Ok(Redirect::to("/homepage").into_response())
            }
        }
        Err(errors) => render(&session, &form, Some(&errors)).await,
    }
}

async fn render(
    session: &SessionState,
    form: &NameMessageForm,
    errors: Option<&FieldErrors>,
) -> Result<Response, ServerError> {
    let template = HomepageTemplate {
        flashes: session.take_flashes().await?,
        name: session.name().await?,
        known: session.known().await?,
        form_name: form.name.clone(),
        form_message: form.message.clone(),
        name_error: errors.and_then(|errors| errors.get("name")).map(str::to_owned),
        message_error: errors
            .and_then(|errors| errors.get("message"))
            .map(str::to_owned),
    };

    Ok(Html(template.render()?).into_response())
}
