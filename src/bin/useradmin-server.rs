//! Mock user store: the `/users` REST resource backed by one JSON file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

#[path = "useradmin_server/persistence.rs"]
mod persistence;
use self::persistence::*;
#[path = "useradmin_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "useradmin_server/records.rs"]
mod records;
use self::records::*;
#[path = "useradmin_server/handlers_users.rs"]
mod handlers_users;
use self::handlers_users::*;
#[path = "useradmin_server/routes.rs"]
mod routes;
use self::routes::*;

/// One stored record. The store enforces no schema beyond "JSON object".
type Record = Map<String, Value>;

#[derive(Clone)]
struct AppState {
    db_path: PathBuf,
    db: Arc<RwLock<Db>>,
}

/// In-memory image of the backing file.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
struct Db {
    #[serde(default)]
    users: Vec<Record>,

    // Other collections living in the same file; written back untouched.
    #[serde(flatten)]
    other: Map<String, Value>,
}

#[derive(Parser)]
#[command(name = "useradmin-server")]
#[command(about = "Mock user store backed by a JSON file", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// JSON file holding the `users` collection (created if missing)
    #[arg(long, default_value = "db.json")]
    db: PathBuf,
}

#[tokio::main]
async fn main() {
    useradmin::logging::init_stderr();
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let db = load_or_init_db(&args.db).context("load db")?;
    tracing::info!(path = %args.db.display(), users = db.users.len(), "db loaded");

    let state = Arc::new(AppState {
        db_path: args.db,
        db: Arc::new(RwLock::new(db)),
    });

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(%local_addr, "useradmin-server listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}

async fn healthz() -> Json<Value> {
    Json(serde_json::json!({"status": "ok"}))
}
