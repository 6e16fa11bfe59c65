//! HTTP server command
//!
//! Connects the MySQL pool, wires the production collaborators into the
//! application state and serves until shutdown.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use peakctl_server::http::{run_server, CorsPolicy, ServerConfig};
use peakctl_server::{AppState, Argon2Hasher};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Only accept browser requests from localhost origins
    #[arg(long)]
    pub cors_localhost: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors: if self.cors_localhost {
                CorsPolicy::Localhost
            } else {
                CorsPolicy::Permissive
            },
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    tracing::info!("Starting peakctl server on {}", config.bind_addr);

    let executor = args.database.connect().await?;
    let state = AppState::new(Arc::new(executor), Arc::new(Argon2Hasher::new()));

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
