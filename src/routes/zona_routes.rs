use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::ZonaController;
use crate::dto::zona_dto::{CreateZonaRequest, UpdateZonaRequest, ZonaMensajeResponse};
use crate::models::ZonaDocumento;
use crate::state::AppState;
use crate::utils::body::CuerpoSolicitud;
use crate::utils::errors::AppError;

pub fn create_zona_router() -> Router<AppState> {
    Router::new()
        .route("/zonas", get(list_zonas))
        .route("/zona/:id_zona", get(get_zona))
        .route("/nueva-zona", post(create_zona))
        .route("/actualizar-zona/:id_zona", put(update_zona))
        .route("/eliminar-zona/:id_zona", delete(delete_zona))
}

async fn list_zonas(
    State(state): State<AppState>,
) -> Result<Json<Vec<ZonaDocumento>>, AppError> {
    let controller = ZonaController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_zona(
    State(state): State<AppState>,
    Path(id_zona): Path<String>,
) -> Result<Json<ZonaDocumento>, AppError> {
    let controller = ZonaController::new(state.store.clone());
    let response = controller.get_by_id(&id_zona).await?;
    Ok(Json(response))
}

async fn create_zona(
    State(state): State<AppState>,
    CuerpoSolicitud(request): CuerpoSolicitud<CreateZonaRequest>,
) -> Result<(StatusCode, Json<ZonaMensajeResponse>), AppError> {
    let controller = ZonaController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_zona(
    State(state): State<AppState>,
    Path(id_zona): Path<String>,
    CuerpoSolicitud(request): CuerpoSolicitud<UpdateZonaRequest>,
) -> Result<Json<ZonaMensajeResponse>, AppError> {
    let controller = ZonaController::new(state.store.clone());
    let response = controller.update(&id_zona, request).await?;
    Ok(Json(response))
}

async fn delete_zona(
    State(state): State<AppState>,
    Path(id_zona): Path<String>,
) -> Result<Json<ZonaMensajeResponse>, AppError> {
    let controller = ZonaController::new(state.store.clone());
    let response = controller.delete(&id_zona).await?;
    Ok(Json(response))
}
