//! HTTP server for the auth gateway
//!
//! Two routes: a liveness probe and the auth callback. The callback
//! exchanges the authorization code for a session, resolves a destination
//! through the partner-routing table, and answers with a 302 redirect.
//! Nothing on this path is fatal: every failure degrades to a default
//! redirect.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::GatewayConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::identity::{HostedAuthClient, IdentityExchanger};
use crate::partner::{PartnerStore, RestPartnerStore};
use crate::resolver;

/// App state shared across handlers
///
/// Exchange and lookup capabilities are injected as trait objects so tests
/// can wire the router to in-memory doubles.
pub struct AppState {
    /// Public origin that redirect paths resolve against
    pub origin: String,
    /// Identity exchange capability
    pub exchanger: Arc<dyn IdentityExchanger>,
    /// Partner lookup capability
    pub store: Arc<dyn PartnerStore>,
}

/// Build the outbound HTTP client for backend calls
pub(crate) fn backend_http_client(config: &GatewayConfig) -> HttpClient {
    let mut builder = HttpClientConfig::builder()
        .base_url(&config.backend.base_url)
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .max_retries(config.http.max_retries)
        .header("apikey", &config.backend.api_key);

    if let Some(rps) = config.http.rate_limit_rps {
        builder = builder.rate_limit(RateLimiterConfig::new(rps, rps));
    }

    HttpClient::with_config(builder.build())
}

/// Build the router for the given state
pub fn build_router(state: AppState) -> Router {
    // Allow all origins; the gateway only ever answers with redirects
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/auth/callback", get(auth_callback))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: GatewayConfig) -> Result<()> {
    let port = config.server.port;

    let state = AppState {
        origin: config.server.public_origin.clone(),
        exchanger: Arc::new(HostedAuthClient::new(backend_http_client(&config))),
        store: Arc::new(RestPartnerStore::new(backend_http_client(&config))),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting auth gateway on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::server(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Query parameters on the auth callback
#[derive(Debug, Deserialize)]
struct CallbackQuery {
    code: Option<String>,
}

/// Auth callback: exchange the code, resolve a destination, redirect.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let session = match query.code.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => match state.exchanger.exchange(code).await {
            Ok(session) => Some(session),
            Err(error) => {
                warn!(%error, "identity exchange failed, redirecting to landing page");
                None
            }
        },
        None => {
            warn!("auth callback without code, redirecting to landing page");
            None
        }
    };

    let destination = resolver::resolve(session.as_ref(), state.store.as_ref()).await;
    let location = destination.redirect_url(&state.origin);

    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
