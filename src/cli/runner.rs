//! Command dispatch

use super::commands::{Cli, Commands};
use super::server;
use crate::config::GatewayConfig;
use crate::error::Result;
use crate::identity::HostedAuthClient;
use serde_json::json;

/// Runs the parsed CLI command
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    pub async fn run(&self) -> Result<()> {
        let mut config = GatewayConfig::from_path(&self.cli.config)?;

        match &self.cli.command {
            Commands::Serve { port } => {
                if let Some(port) = port {
                    config.server.port = *port;
                }
                server::serve(config).await
            }
            Commands::Check => self.check(&config).await,
        }
    }

    /// Probe the backend auth service and report the outcome
    async fn check(&self, config: &GatewayConfig) -> Result<()> {
        let client = HostedAuthClient::new(server::backend_http_client(config));

        let status = match client.health().await {
            Ok(()) => json!({
                "status": "SUCCEEDED",
                "message": "Backend reachable"
            }),
            Err(e) => json!({
                "status": "FAILED",
                "message": format!("Backend unreachable: {e}")
            }),
        };

        println!("{}", serde_json::to_string_pretty(&status)?);
        Ok(())
    }
}
