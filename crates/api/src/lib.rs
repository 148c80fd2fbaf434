//! HTTP status service.
//!
//! Serves a single route, `/`, answering every method with a fixed JSON
//! status payload. Anything else falls through to axum's default 404.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::any;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;
use error::{Result, ServerError};

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route("/", any(routes::status::get))
        .layer(TraceLayer::new_for_http())
}

/// Binds the listening socket for `config`.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Runs the serve loop until the listener fails. There is no graceful shutdown.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}
