use axum::response::IntoResponse;
use registry::RegistryError;

pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod errors;
mod forms;
mod homepage;
mod index;
mod login;
mod misc;
mod server;
mod session;

/// Failures a handler can propagate.
///
/// Whatever the variant, the visitor only ever sees the fixed 500 view;
/// the detail goes to the log.
pub enum ServerError {
    Registry(RegistryError),
    Session(tower_sessions::session::Error),
    Render(askama::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ServerError::Registry(err) => tracing::error!("registry error: {err}"),
            ServerError::Session(err) => tracing::error!("session error: {err}"),
            ServerError::Render(err) => tracing::error!("render error: {err}"),
        }

        errors::internal_page()
    }
}

impl From<RegistryError> for ServerError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

impl From<tower_sessions::session::Error> for ServerError {
    fn from(value: tower_sessions::session::Error) -> Self {
        Self::Session(value)
    }
}

impl From<askama::Error> for ServerError {
    fn from(value: askama::Error) -> Self {
        Self::Render(value)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::DbErr;

    use super::*;

    #[test]
    fn registry_error_maps_to_500() {
        let res = ServerError::from(RegistryError::Corrupted("alice".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = RegistryError::from(DbErr::Custom("boom".to_string()));
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
