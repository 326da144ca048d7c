//! agent-relay server binary.

use std::sync::Arc;

use agent_relay::config::RelayConfig;
use agent_relay::error::RelayError;
use agent_relay::server::{HttpServer, InvokeService};
use agent_relay::session::BearerSessionProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), RelayError> {
    let config = RelayConfig::from_env()?;
    let sessions = Arc::new(BearerSessionProvider::new());
    let service = Arc::new(InvokeService::new(config.clone(), sessions));

    let server = HttpServer::bind(config.bind_addr, service).await?;
    tracing::info!(
        addr = %server.local_addr()?,
        agent_core_url = %config.agent_core_url,
        "agent-relay listening"
    );
    server.serve().await
}
