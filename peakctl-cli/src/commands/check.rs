//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use peakctl_server::QueryExecutor;

use super::DatabaseArgs;

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Connect, ping once and report.
pub async fn run_check(args: CheckArgs) -> Result<()> {
    let executor = args.database.connect().await?;
    let ping = executor.ping().await.context("Database did not answer");
    executor.close().await;
    ping?;

    println!("database ok");
    Ok(())
}
