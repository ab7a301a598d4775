//! Rutas HTTP
//!
//! Asocia cada método y path de la API con su handler.

pub mod ruta_routes;
pub mod zona_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::middleware::{cors_layer, request_logging};
use crate::state::AppState;

/// Construir la aplicación completa con middleware y estado
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/test", get(test_endpoint))
        .merge(zona_routes::create_zona_router())
        .merge(ruta_routes::create_ruta_router())
        .layer(cors)
        .layer(request_logging())
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<Value> {
    Json(json!({
        "message": "¡API de zonas y rutas funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
