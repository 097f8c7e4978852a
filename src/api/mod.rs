//! HTTP layer exposing transcript analysis.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::nlp::Pipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

/// Router with all routes and middleware, ready to serve.
pub fn router(pipeline: Pipeline) -> Router {
    let state = AppState { pipeline };
    Router::new()
        .route("/health", get(routes::health))
        .route("/analyze", post(routes::analyze))
        .route("/classify", post(routes::classify))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn serve(pipeline: Pipeline, host: String, port: u16) -> Result<()> {
    let router = router(pipeline);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving physician-notetaker API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
