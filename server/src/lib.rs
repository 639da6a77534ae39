//! HTTP service exposing CRUD operations on todos stored in SQLite.
//!
//! # Overview
//! - `GET /todos`, `POST /todos`
//! - `GET`, `PUT`, `DELETE /todos/{id}`
//! - `PATCH /todos/{id}/completed?completed=true|false`
//!
//! The `TodoStore` is opened once before the listener starts accepting
//! connections, passed to every handler as router state, and closed after
//! the server shuts down.

pub mod config;
pub mod error;
pub mod handlers;
pub mod schema;
pub mod store;
pub mod types;

use std::future::Future;

use axum::{
    routing::{get, patch},
    Router,
};
use tokio::{net::TcpListener, signal};

pub use config::Config;
pub use error::{ApiError, StoreError};
pub use store::TodoStore;
pub use types::{CompletedStatus, MessageResponse, NewTodo, Todo};

use handlers::{create_todo, delete_todo, get_todo, list_todos, set_completed, update_todo};

pub fn app(store: TodoStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/todos/{id}/completed", patch(set_completed))
        .with_state(store)
}

/// Serves until Ctrl+C or SIGTERM, then closes the store.
pub async fn run(listener: TcpListener, store: TodoStore) -> anyhow::Result<()> {
    serve(listener, store, shutdown_signal()).await
}

/// Serves until `shutdown` resolves, then closes the store.
pub async fn serve<F>(listener: TcpListener, store: TodoStore, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(store.clone()))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server stopped");
    store.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
