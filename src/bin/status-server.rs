//! GoatedVIPs status page server.
//! Binds 0.0.0.0:$PORT (default 8080) and serves one fixed page until
//! killed.

use goated_ops::config::ServerConfig;
use goated_ops::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();
    tracing::info!("starting status server on {}", addr);

    server::run(&addr).await?;
    Ok(())
}
