//! SQLite-backed persistence for todos.
//!
//! # Design
//! `TodoStore` is a cheap, cloneable handle to one `tokio_rusqlite`
//! connection. The connection runs on its own thread and serializes every
//! call, so handlers share the handle through router state without any
//! application-level locking.
//!
//! Update, set-completed, and delete are unconditional statements: they
//! report the number of rows affected and treat zero as success.

use std::path::Path;

use rusqlite::OpenFlags;
use tokio_rusqlite::Connection;

use crate::error::StoreError;
use crate::schema;
use crate::types::{NewTodo, Todo};

pub type Result<T> = std::result::Result<T, StoreError>;

fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        completed: row.get::<_, Option<bool>>(3)?.unwrap_or(false),
    })
}

#[derive(Clone)]
pub struct TodoStore {
    conn: Connection,
}

impl TodoStore {
    /// Opens (or creates) the database file at `path`, creating its parent
    /// directory first, and ensures the `todos` table exists.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StoreError::DataDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        let flags = OpenFlags::default() | OpenFlags::SQLITE_OPEN_SHARED_CACHE;
        let conn = Connection::open_with_flags(path, flags).await?;
        let store = Self::init(conn).await?;
        tracing::info!(path = %path.display(), "opened todo store");
        Ok(store)
    }

    /// Opens a private in-memory database with the same schema.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().await?;
        Self::init(conn).await
    }

    async fn init(conn: Connection) -> Result<Self> {
        conn.call(|conn| conn.execute_batch(schema::CREATE_TABLE).map_err(wrap_err))
            .await?;
        Ok(Self { conn })
    }

    /// All rows in storage order.
    pub async fn list(&self) -> Result<Vec<Todo>> {
        let todos = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                let mut todos = Vec::new();
                for row in rows {
                    todos.push(row.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await?;
        tracing::debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    /// Inserts a row and returns the id SQLite assigned to it.
    pub async fn insert(&self, input: &NewTodo) -> Result<i64> {
        let NewTodo {
            name,
            description,
            completed,
        } = input.clone();

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(schema::INSERT, rusqlite::params![name, description, completed])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await?;
        tracing::debug!(id, "inserted todo");
        Ok(id)
    }

    /// Looks up one row. `id` is bound as given; text that is not a number
    /// matches nothing.
    pub async fn get(&self, id: &str) -> Result<Option<Todo>> {
        let id = id.to_string();
        let todo = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id], row_to_todo) {
                    Ok(todo) => Ok(Some(todo)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await?;
        Ok(todo)
    }

    /// Replaces every column except `id`. Returns rows affected.
    pub async fn update(&self, id: i64, input: &NewTodo) -> Result<usize> {
        let NewTodo {
            name,
            description,
            completed,
        } = input.clone();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE,
                    rusqlite::params![name, description, completed, id],
                )
                .map_err(wrap_err)
            })
            .await?;
        tracing::debug!(id, rows, "updated todo");
        Ok(rows)
    }

    /// Sets the completed flag. Returns rows affected.
    pub async fn set_completed(&self, id: &str, completed: bool) -> Result<usize> {
        let id = id.to_string();
        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(schema::UPDATE_COMPLETED, rusqlite::params![completed, id])
                    .map_err(wrap_err)
            })
            .await?;
        tracing::debug!(rows, completed, "set todo completed");
        Ok(rows)
    }

    /// Hard-deletes a row. Returns rows affected.
    pub async fn delete(&self, id: &str) -> Result<usize> {
        let id = id.to_string();
        let rows = self
            .conn
            .call(move |conn| conn.execute(schema::DELETE, [&id]).map_err(wrap_err))
            .await?;
        tracing::debug!(rows, "deleted todo");
        Ok(rows)
    }

    /// Closes the underlying connection. Other clones of this handle fail
    /// with `StoreError::ConnectionClosed` afterwards.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        tracing::info!("closed todo store");
        Ok(())
    }
}
