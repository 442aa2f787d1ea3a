use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "music-service",
    author,
    version,
    about = "HTTP service for users, songs and the songs assigned to each user",
    long_about = "Serves JSON endpoints for creating, listing and deleting users and songs, \
                  and for assigning songs to users, on top of a Postgres or SQLite database."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    let outcome = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
    };

    if let Err(e) = &outcome {
        tracing::error!("{:#}", e);
    }
    outcome
}
