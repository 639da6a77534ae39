//! Wire types for the todo API.
//!
//! # Design
//! Every payload the service reads or writes has its own struct, including
//! the small ad-hoc ones (`CompletedStatus`, `MessageResponse`), so the JSON
//! shape of each endpoint is visible in one place.

use serde::{Deserialize, Serialize};

/// A persisted todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn from_input(id: i64, input: NewTodo) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            completed: input.completed,
        }
    }
}

/// Request body for create and update. An `id` key in the body is ignored;
/// the store (create) or the path (update) decides the id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Response of `PATCH /todos/{id}/completed`. The id is echoed exactly as it
/// appeared in the path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedStatus {
    pub id: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query string of `PATCH /todos/{id}/completed`.
#[derive(Debug, Default)]
pub struct SetCompletedParams {
    pub completed: Option<String>,
}

impl SetCompletedParams {
    /// Keeps the first `completed` value; later repeats are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            completed: pairs
                .into_iter()
                .find(|(key, _)| key == "completed")
                .map(|(_, value)| value),
        }
    }

    /// Only the literal `"true"` counts as completed.
    pub fn is_completed(&self) -> bool {
        self.completed.as_deref() == Some("true")
    }
}
