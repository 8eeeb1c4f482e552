//! Rutas de la API
//!
//! Ensamblado del router: endpoints públicos (health), endpoints protegidos
//! por el middleware JWT, y las capas de timeout, trace y CORS.

pub mod gps_routes;
pub mod paseo_routes;

use axum::{middleware as axum_middleware, response::Json, routing::get, Router};
use serde_json::json;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Crear la aplicación completa
pub fn create_app(state: AppState) -> Router {
    let protegido = Router::new()
        .nest("/api/gps", gps_routes::create_gps_router())
        .nest("/api/paseo", paseo_routes::create_paseo_router())
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_endpoint))
        .merge(protegido)
        // El storage no define timeout propio; 30s acota la request completa
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

/// Health check público
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "pet-walker-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
