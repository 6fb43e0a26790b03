//! HTTP server hosting the BMI endpoint

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use super::handlers::{calculate_bmi, health_check};
use crate::config::ServerConfig;

/// Build the application router
pub fn build_router() -> Router {
    Router::new()
        .route("/bmi", post(calculate_bmi))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("BMI server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("BMI server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
