//! List membership plan names known to the database

use anyhow::{Context, Result};
use clap::Parser;

use gymctl_server::db::{create_pool, PlanRepo};

/// Arguments for the plans command
#[derive(Parser, Debug)]
pub struct PlansArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Print JSON instead of one name per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run_plans(args: PlansArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ./.env")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    let plans = PlanRepo::new(pool)
        .list()
        .await
        .context("Failed to list membership plans")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        for plan in &plans {
            println!("{}", plan.name);
        }
    }

    Ok(())
}
