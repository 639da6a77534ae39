//! Route handlers for `/todos`.
//!
//! Each handler decodes its inputs once (path id, query, JSON body), makes a
//! single store call, and maps the outcome through `ApiError`.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, FromRequest, Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, INVALID_ID_MESSAGE};
use crate::store::TodoStore;
use crate::types::{CompletedStatus, NewTodo, SetCompletedParams, Todo};

pub const JSON_CONTENT_TYPE_MESSAGE: &str = "Expected request with `Content-Type: application/json`";

/// JSON request body. An empty body binds nothing and yields `T::default()`;
/// every other failure is a plain-text 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        if bytes.is_empty() {
            return Ok(JsonBody(T::default()));
        }
        if !is_json {
            return Err(ApiError::BadRequest(JSON_CONTENT_TYPE_MESSAGE.to_string()));
        }
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(JsonBody(value))
    }
}

fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

/// Decodes a path id that must be an integer.
pub fn parse_todo_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(INVALID_ID_MESSAGE.to_string()))
}

pub async fn list_todos(State(store): State<TodoStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(store.list().await?))
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    JsonBody(input): JsonBody<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let id = store.insert(&input).await?;
    Ok((StatusCode::CREATED, Json(Todo::from_input(id, input))))
}

pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    store.get(&id).await?.map(Json).ok_or(ApiError::NotFound)
}

/// Unconditional update: a missing row still answers 200 with the
/// submitted fields.
pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<NewTodo>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_todo_id(&id)?;
    store.update(id, &input).await?;
    Ok(Json(Todo::from_input(id, input)))
}

pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The first `completed` pair in the query decides; an undecodable query
/// string counts as "not completed".
pub async fn set_completed(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CompletedStatus>, ApiError> {
    let pairs = pairs.map(|Query(pairs)| pairs).unwrap_or_default();
    let completed = SetCompletedParams::from_pairs(pairs).is_completed();
    store.set_completed(&id, completed).await?;
    Ok(Json(CompletedStatus { id, completed }))
}
