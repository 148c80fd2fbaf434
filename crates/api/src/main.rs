//! Status server entry point.

use status_api::config::{Config, DEFAULT_LOG_LEVEL};
use status_api::error::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

async fn run(config: Config) -> Result<()> {
    let listener = status_api::bind(&config).await?;
    status_api::serve(listener, status_api::create_app()).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::default();
    tracing::info!(addr = %config.addr(), "server starting");

    if let Err(err) = run(config).await {
        tracing::error!(error = %err, "server failed");
        std::process::exit(1);
    }
}
