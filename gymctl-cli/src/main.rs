//! gymctl CLI - gym membership API server and tooling
//!
//! - `serve`: run the HTTP API (members, memberships, plans)
//! - `plans`: list membership plan names from the database

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "gymctl", version, about = "Gym membership API server")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),

    /// List membership plans
    Plans(commands::plans::PlansArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env values never override variables already set
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Plans(args) => commands::run_plans(args).await?,
    }

    Ok(())
}
