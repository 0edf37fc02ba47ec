//! AEAI Server — the HTTP application.
//!
//! A request-scoped, single-pass rendering flow: each handler fetches the
//! content it needs from the CMS, swaps in fallback content on any failure,
//! assembles the page's view model, and renders the markup. No state is
//! shared across requests beyond the CMS client itself.
//!
//! # Modules
//!
//! - [`state`]: shared application state
//! - [`router`]: the route table
//! - [`handlers`]: per-route fetch-and-render handlers

pub mod handlers;
pub mod router;
pub mod state;

pub use router::router;
pub use state::AppState;

use std::path::PathBuf;

use aeai_core::{Error, Result};

/// Bind `addr` and serve the site until shutdown.
pub async fn serve(state: AppState, assets_dir: PathBuf, addr: &str) -> Result<()> {
    let app = router(state, assets_dir);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("cannot bind {addr}: {e}")))?;
    tracing::info!(%addr, "site server listening");
    axum::serve(listener, app).await.map_err(Error::Io)
}
