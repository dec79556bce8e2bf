//! Gateway for the GATE score predictor.
//!
//! Serves the prediction form at `/` and relays `POST /api/predict` to the
//! external prediction service.
//!
//! ```text
//! browser ──► GET /             ──► form page
//!         ──► POST /api/predict ──► shape check ──► prediction service
//!                                        │                 │
//!                                        └── 400 {error}   └── status + body, verbatim
//! ```
//!
//! The gateway never scores or stores anything.

pub mod config;
pub mod error;
pub mod relay;
pub mod routes;
pub mod validate;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use error::{Result, ServerError};
pub use relay::{Relayed, Upstream};
pub use routes::{AppState, INDEX_HTML, router};

use tokio::net::TcpListener;

/// Bind the configured address and serve until the process exits.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    config.validate()?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        addr = %addr,
        upstream = %config.upstream,
        "Starting prediction gateway"
    );
    serve_listener(listener, config).await
}

/// Serve on an already bound listener.
pub async fn serve_listener(listener: TcpListener, config: &ServerConfig) -> Result<()> {
    let state = AppState::new(Upstream::new(config.upstream.clone())?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
