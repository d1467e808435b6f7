//! Web dashboard over the zone summary table.
//!
//! Serves a login-gated HTML page and an open JSON API. The zone rows are
//! loaded once at startup; the [`Session`] is the only mutable state.

pub mod pages;
pub mod routes;
pub mod session;
pub mod source;

pub use session::{ActivityEntry, Session};
pub use source::{CsvZoneSource, JsonZoneSource, ZoneProfile, ZoneSource, ZoneView, source_for_path};

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared by every handler.
pub struct AppState {
    pub zones: Vec<ZoneView>,
    pub session: RwLock<Session>,
}

impl AppState {
    pub fn new(zones: Vec<ZoneView>) -> Self {
        Self {
            zones,
            session: RwLock::new(Session::default()),
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Builds the dashboard router around `state`.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/login", post(routes::login))
        .route("/logout", post(routes::logout))
        .route("/zones", get(routes::zones))
        .route("/zones/:zone", get(routes::zone_detail))
        .route("/activity", get(routes::activity))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Loads the zones from `source` and serves the dashboard on `addr` until
/// the process is stopped.
#[tracing::instrument(skip(source))]
pub async fn serve(addr: &str, source: &dyn ZoneSource) -> Result<()> {
    let zones = source.load_zones().await?;
    info!(zones = zones.len(), "Zone rows loaded");

    let app = router(Arc::new(AppState::new(zones)));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "Dashboard listening");

    axum::serve(listener, app).await?;
    Ok(())
}
