use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_server::{Config, TodoStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Schema failures end the process here, before anything is bound.
    let store = TodoStore::open(config.database_path()).await?;

    let listener = TcpListener::bind(config.bind_address()).await?;
    todo_server::run(listener, store).await
}
