//! Error types for the todo API client.
//!
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." `BadRequest` carries the server's plain-text reason. All other
//! unexpected responses land in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404. `message` is the JSON `message` field when
    /// the body carried one.
    #[error("resource not found")]
    NotFound { message: Option<String> },

    /// The server returned 400.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned a status other than the expected one, 400, or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
