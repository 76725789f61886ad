use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::Method;
use axum::routing::get;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{list_badges, metrics, render_profile_badge, render_profile_badges};
use crate::badge::BadgeRegistry;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub registry: Arc<BadgeRegistry>,
}

impl AppState {
    pub fn new(pool: SqlitePool, registry: BadgeRegistry) -> Self {
        Self {
            pool,
            registry: Arc::new(registry),
        }
    }
}

pub fn build_api_router(state: AppState) -> Router {
    Router::new()
        .route("/badges", get(list_badges))
        .route("/people/{person_id}/badges", get(render_profile_badges))
        .route(
            "/people/{person_id}/badges/{badge_id}",
            get(render_profile_badge),
        )
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET]),
        )
        .with_state(state)
}

pub async fn run_api(state: AppState, bind_addr: String, shutdown: CancellationToken) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("badge API listening on http://{}", bind_addr);

    axum::serve(listener, build_api_router(state))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;
    Ok(())
}
