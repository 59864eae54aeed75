use std::sync::Arc;

use axum::{Router, routing::get};
use tower_sessions::{MemoryStore, SessionManagerLayer};

use registry::Registry;

use crate::{errors, homepage, index, login, misc};

#[derive(Clone)]
pub struct ServerState {
    pub registry: Arc<Registry>,
}

/// Build the application router with its session layer installed.
///
/// Sessions live in an in-memory store and do not survive a restart.
pub fn router(state: ServerState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    Router::new()
        .route("/", get(index::get).post(index::post))
        .route("/homepage", get(homepage::get).post(homepage::post))
        .route("/login", get(login::get).post(login::post))
        .route("/loggedin", get(login::logged_in))
        .route("/abortme/{id}", get(misc::abortme))
        .route("/uturn", get(misc::uturn))
        .route("/cookies", get(misc::cookies))
        .route("/user/{name}", get(misc::user))
        .route("/post/{id}", get(misc::post_id))
        .route("/path/{*subpath}", get(misc::subpath))
        .fallback(errors::fallback)
        .layer(session_layer)
        .with_state(state)
}

pub async fn run(registry: Registry) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(registry, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    registry: Registry,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        registry: Arc::new(registry),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    registry: Registry,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(registry, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
