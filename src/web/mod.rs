// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! HTTP server for the landing pages and the entity-discovery socket

pub mod protocol;
pub mod socket;

use axum::{
    extract::{ws::WebSocketUpgrade, Path, Query, State},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tokio::signal;
use tracing::{info, warn};

use crate::animator::{stack_style, NotificationTemplate, StackStyle, CATALOG};
use crate::config::AppConfig;
use crate::site::variants::Variant;
use crate::site::{SiteRenderer, SOCKET_PATH};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub renderer: SiteRenderer,
}

impl AppState {
    pub fn new(config: AppConfig) -> crate::Result<Self> {
        Ok(Self {
            config,
            renderer: SiteRenderer::new()?,
        })
    }
}

/// Create the web application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.web.assets_dir);
    let cors = state.config.web.cors;

    let router = Router::new()
        // Pages
        .route("/", get(index_page))
        .route("/v/:variant", get(variant_page))
        // API endpoints
        .route("/api/catalog", get(api_catalog))
        .route("/api/stack-styles", get(api_stack_styles))
        .route("/api/variants", get(api_variants))
        .route("/healthz", get(healthz))
        // Live panel
        .route(SOCKET_PATH, get(entity_discovery_socket))
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

// === Page Handlers ===

async fn index_page(State(state): State<Arc<AppState>>) -> crate::Result<Html<String>> {
    let html = state
        .renderer
        .render_named(&state.config.site.default_variant, &state.config)?;
    Ok(Html(html))
}

async fn variant_page(
    State(state): State<Arc<AppState>>,
    Path(variant): Path<String>,
) -> crate::Result<Html<String>> {
    Ok(Html(state.renderer.render_named(&variant, &state.config)?))
}

// === API Handlers ===

async fn api_catalog() -> Json<&'static [NotificationTemplate]> {
    Json(CATALOG.as_slice())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotStyle {
    slot: i32,
    #[serde(flatten)]
    style: StackStyle,
    transform: String,
}

async fn api_stack_styles() -> Json<Vec<SlotStyle>> {
    let styles = (-1..=3)
        .map(|slot| {
            let style = stack_style(slot);
            SlotStyle { slot, style, transform: style.transform() }
        })
        .collect();
    Json(styles)
}

#[derive(Serialize)]
struct VariantSummary {
    name: &'static str,
    label: &'static str,
    tagline: &'static str,
    tick_interval_ms: u64,
}

async fn api_variants(State(state): State<Arc<AppState>>) -> Json<Vec<VariantSummary>> {
    let variants = Variant::all()
        .iter()
        .map(|v| VariantSummary {
            name: v.name,
            label: v.label,
            tagline: v.tagline,
            tick_interval_ms: state.config.animator.for_variant(v).tick_interval_ms,
        })
        .collect();
    Json(variants)
}

async fn healthz() -> &'static str {
    "ok"
}

// === Live Panel ===

#[derive(Deserialize)]
struct SocketQuery {
    variant: Option<String>,
}

async fn entity_discovery_socket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<SocketQuery>,
) -> Response {
    let variant = query
        .variant
        .as_deref()
        .and_then(Variant::find)
        .or_else(|| Variant::find(&state.config.site.default_variant));

    let config = match variant {
        Some(v) => state.config.animator.for_variant(v),
        None => state.config.animator,
    };

    ws.on_upgrade(move |stream| socket::run_session(stream, config))
        .into_response()
}

/// Start the web server and run until Ctrl+C or SIGTERM
pub async fn start_server(config: AppConfig) -> crate::Result<()> {
    let addr = format!("{}:{}", config.web.host, config.web.port);
    let state = Arc::new(AppState::new(config)?);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Landing site available at http://{}", addr);

    let router = create_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| crate::SiteError::Server(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
