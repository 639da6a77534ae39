//! Error types for the store and the HTTP layer.
//!
//! # Design
//! `StoreError` keeps the underlying SQLite error intact so its text can be
//! returned verbatim in 500 responses. `ApiError` is the only error a handler
//! returns; its `IntoResponse` impl owns the status-code mapping.

use std::path::PathBuf;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::MessageResponse;

pub const NOT_FOUND_MESSAGE: &str = "Todo not found";
pub const INVALID_ID_MESSAGE: &str = "Invalid ID";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data directory {}: {source}", .path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("database connection closed")]
    ConnectionClosed,

    #[error("{0}")]
    Other(String),
}

impl From<tokio_rusqlite::Error> for StoreError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        match err {
            tokio_rusqlite::Error::Rusqlite(e) => StoreError::Sqlite(e),
            tokio_rusqlite::Error::Close((_, e)) => StoreError::Sqlite(e),
            tokio_rusqlite::Error::ConnectionClosed => StoreError::ConnectionClosed,
            other => StoreError::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: NOT_FOUND_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Store(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
