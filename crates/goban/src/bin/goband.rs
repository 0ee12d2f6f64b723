//! Process bootstrap for the Gomoku relay.

use goban::GobanServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server = GobanServer::builder().bind("0.0.0.0:8181").build().await?;
    tracing::info!(addr = %server.local_addr()?, "gomoku relay listening");
    server.run().await?;
    Ok(())
}
