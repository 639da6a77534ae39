//! SQL statements for the `todos` table.

pub const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    description TEXT,
    completed BOOLEAN DEFAULT FALSE
);";

pub const SELECT_ALL: &str = "SELECT id, name, description, completed FROM todos";

pub const SELECT_BY_ID: &str =
    "SELECT id, name, description, completed FROM todos WHERE id = ?1";

pub const INSERT: &str = "INSERT INTO todos (name, description, completed) VALUES (?1, ?2, ?3)";

pub const UPDATE: &str =
    "UPDATE todos SET name = ?1, description = ?2, completed = ?3 WHERE id = ?4";

pub const UPDATE_COMPLETED: &str = "UPDATE todos SET completed = ?1 WHERE id = ?2";

pub const DELETE: &str = "DELETE FROM todos WHERE id = ?1";
