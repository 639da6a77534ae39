//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CompletedStatus, MessageBody, Todo, TodoInput};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request(
        &self,
        method: HttpMethod,
        path: String,
        input: &TodoInput,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            ..self.request(method, path)
        })
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos".to_string())
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/todos/{id}"))
    }

    pub fn build_create_todo(&self, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/todos".to_string(), input)
    }

    pub fn build_update_todo(&self, id: i64, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("/todos/{id}"), input)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/todos/{id}"))
    }

    pub fn build_set_completed(&self, id: i64, completed: bool) -> HttpRequest {
        self.request(
            HttpMethod::Patch,
            format!("/todos/{id}/completed?completed={completed}"),
        )
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }

    pub fn parse_set_completed(&self, response: HttpResponse) -> Result<CompletedStatus, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound {
            message: serde_json::from_str::<MessageBody>(&response.body)
                .ok()
                .map(|body| body.message),
        }),
        400 => Err(ApiError::BadRequest(response.body.clone())),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn input() -> TodoInput {
        TodoInput {
            name: "Buy milk".to_string(),
            description: "2%".to_string(),
            completed: false,
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let req = client().build_create_todo(&input()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Buy milk", "description": "2%", "completed": false})
        );
    }

    #[test]
    fn build_update_todo_sends_every_field() {
        let req = client().build_update_todo(3, &TodoInput::default()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/todos/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "", "description": "", "completed": false})
        );
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/todos/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_set_completed_uses_query_parameter() {
        let req = client().build_set_completed(3, true);
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:8080/todos/3/completed?completed=true");
        assert!(req.body.is_none());

        let req = client().build_set_completed(3, false);
        assert_eq!(req.path, "http://localhost:8080/todos/3/completed?completed=false");
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = client()
            .parse_list_todos(response(
                200,
                r#"[{"id":1,"name":"Test","description":"","completed":false}]"#,
            ))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].name, "Test");
    }

    #[test]
    fn parse_get_todo_not_found_keeps_message() {
        let err = client()
            .parse_get_todo(response(404, r#"{"message":"Todo not found"}"#))
            .unwrap_err();
        match err {
            ApiError::NotFound { message } => assert_eq!(message.as_deref(), Some("Todo not found")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn parse_get_todo_not_found_without_body() {
        let err = client().parse_get_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { message: None }));
    }

    #[test]
    fn parse_create_todo_success() {
        let todo = client()
            .parse_create_todo(response(
                201,
                r#"{"id":1,"name":"Buy milk","description":"2%","completed":false}"#,
            ))
            .unwrap();
        assert_eq!(
            todo,
            Todo {
                id: 1,
                name: "Buy milk".to_string(),
                description: "2%".to_string(),
                completed: false,
            }
        );
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let err = client()
            .parse_create_todo(response(500, "disk I/O error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, ref body } if body == "disk I/O error"));
    }

    #[test]
    fn parse_update_todo_invalid_id() {
        let err = client()
            .parse_update_todo(response(400, "Invalid ID"))
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref body) if body == "Invalid ID"));
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_rejects_200() {
        let err = client().parse_delete_todo(response(200, "")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 200, .. }));
    }

    #[test]
    fn parse_set_completed_success() {
        let status = client()
            .parse_set_completed(response(200, r#"{"id":"1","completed":true}"#))
            .unwrap();
        assert_eq!(
            status,
            CompletedStatus {
                id: "1".to_string(),
                completed: true,
            }
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8080/");
        let req = client.build_list_todos();
        assert_eq!(req.path, "http://localhost:8080/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
