//! DTOs for the todo API.
//!
//! These mirror the server's wire shapes but are defined independently.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

/// Request payload for create and update. Update replaces every field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Result of setting the completed flag. The server echoes the path id as
/// text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedStatus {
    pub id: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageBody {
    pub message: String,
}
