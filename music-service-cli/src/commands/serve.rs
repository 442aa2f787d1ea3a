//! HTTP server command
//!
//! Connects the storage, optionally bootstraps the schema and runs the
//! music-service routes until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use music_service_server::{ensure_schema, run_server, ServerConfig, Storage, StorageConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MUSIC_SERVICE_BIND", default_value = "0.0.0.0:8888")]
    pub bind: SocketAddr,

    /// Database URL (postgres://... or sqlite:...)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Database user, replaces any user embedded in the URL
    #[arg(long, env = "DATABASE_USER")]
    pub database_user: Option<String>,

    /// Database password, replaces any password embedded in the URL
    #[arg(long, env = "DATABASE_PASSWORD", hide_env_values = true)]
    pub database_password: Option<String>,

    /// Create the users/songs/user_songs tables if they are missing
    #[arg(
        long,
        env = "MUSIC_SERVICE_INIT_SCHEMA",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub init_schema: bool,
}

impl ServeArgs {
    fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            url: self.database_url.clone(),
            user: self.database_user.clone(),
            password: self.database_password.clone(),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let storage_config = args.storage_config();

    let storage = Storage::connect(&storage_config)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        backend = storage.backend().as_str(),
        "Starting music-service on {}",
        args.bind
    );

    if args.init_schema {
        if let Err(e) = ensure_schema(&storage).await {
            storage.close().await;
            return Err(e).context("Failed to bootstrap schema");
        }
        tracing::info!("Schema ready");
    }

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    let result = run_server(storage.clone(), config)
        .await
        .context("Server error");

    storage.close().await;
    tracing::info!("Storage closed");

    result
}
