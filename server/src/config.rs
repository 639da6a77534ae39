use std::path::PathBuf;

use clap::Parser;

pub const DATABASE_FILE: &str = "database.db";

/// Todo service backed by SQLite.
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value_t = 8080, env = "PORT")]
    pub port: u16,

    /// Directory holding the database file
    #[arg(long, default_value = "data", env = "TODO_DATA_DIR")]
    pub data_dir: PathBuf,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
