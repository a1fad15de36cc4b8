// ABOUTME: HTTP server assembly and lifecycle for the bakery production API
// ABOUTME: Builds the axum router with tracing, request-id, and CORS layers, then serves it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::environment::ServerConfig;
use crate::database::SqliteInventory;
use crate::middleware::{make_request_span, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, RecipeRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

/// Build the full application router
///
/// Layer order, outermost first: CORS, request id assignment, request
/// span, request id echo on the response.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
}

/// Open the configured store and wire server resources around it
///
/// # Errors
///
/// Returns an error if the store cannot be opened or migrated.
pub async fn bootstrap(config: ServerConfig) -> Result<Arc<ServerResources>> {
    let store = SqliteInventory::connect(&config.database.url)
        .await
        .context("Failed to open inventory store")?;

    if config.database.auto_migrate {
        store
            .migrate()
            .await
            .context("Failed to migrate inventory store")?;
        info!("Inventory schema ready");
    }

    Ok(Arc::new(ServerResources::new(
        Arc::new(config),
        Arc::new(store),
    )))
}

/// Serve the API until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("Shutdown signal received");
}
