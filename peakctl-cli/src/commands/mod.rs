//! Command implementations for peakctl CLI

use anyhow::{Context, Result};
use clap::Args;

use peakctl_server::db::create_pool_with_options;
use peakctl_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use peakctl_server::MySqlExecutor;

pub mod check;
pub mod serve;

pub use check::run_check;
pub use serve::run_serve;

/// Database connection flags shared by every command.
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// MySQL connection URL
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "mysql://root@localhost:3306/peakperformance",
        hide_env_values = true
    )]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "PEAK_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Open a pool sized by `--max-connections` and wrap it in an executor.
    pub async fn connect(&self) -> Result<MySqlExecutor> {
        let pool = create_pool_with_options(&self.database_url, self.max_connections)
            .await
            .context("Failed to connect to the database. Check DATABASE_URL or --database-url")?;
        Ok(MySqlExecutor::new(pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connect_sizes_pool_from_flag() {
        let args = DatabaseArgs {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL required"),
            max_connections: 3,
        };

        let executor = args.connect().await.expect("connect failed");
        assert_eq!(executor.pool().options().get_max_connections(), 3);
    }
}
