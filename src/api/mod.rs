pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use std::sync::Arc;
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::Settings;

/// Server-wide defaults. Each request may layer its own credentials on top.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self { settings: Arc::new(settings) }
    }
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/analyze", axum::routing::post(routes::analyze::analyze))
        .route("/api/generate", axum::routing::post(routes::generate::generate))
        .route_layer(middleware::from_fn(auth::api_auth_middleware));

    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
