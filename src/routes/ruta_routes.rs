use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::RutaController;
use crate::dto::ruta_dto::{CreateRutaRequest, RutaMensajeResponse, UpdateRutaRequest};
use crate::models::RutaDocumento;
use crate::state::AppState;
use crate::utils::body::CuerpoSolicitud;
use crate::utils::errors::AppError;

pub fn create_ruta_router() -> Router<AppState> {
    Router::new()
        .route("/rutas", get(list_rutas))
        .route("/ruta/:id_ruta", get(get_ruta))
        .route("/nueva-ruta", post(create_ruta))
        .route("/actualizar-ruta/:id_ruta", put(update_ruta))
        .route("/eliminar-ruta/:id_ruta", delete(delete_ruta))
        .route("/rutas-por-zona/:id_zona", get(list_rutas_by_zona))
}

async fn list_rutas(
    State(state): State<AppState>,
) -> Result<Json<Vec<RutaDocumento>>, AppError> {
    let controller = RutaController::new(state.store.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_ruta(
    State(state): State<AppState>,
    Path(id_ruta): Path<String>,
) -> Result<Json<RutaDocumento>, AppError> {
    let controller = RutaController::new(state.store.clone());
    let response = controller.get_by_id(&id_ruta).await?;
    Ok(Json(response))
}

async fn create_ruta(
    State(state): State<AppState>,
    CuerpoSolicitud(request): CuerpoSolicitud<CreateRutaRequest>,
) -> Result<(StatusCode, Json<RutaMensajeResponse>), AppError> {
    let controller = RutaController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_ruta(
    State(state): State<AppState>,
    Path(id_ruta): Path<String>,
    CuerpoSolicitud(request): CuerpoSolicitud<UpdateRutaRequest>,
) -> Result<Json<RutaMensajeResponse>, AppError> {
    let controller = RutaController::new(state.store.clone());
    let response = controller.update(&id_ruta, request).await?;
    Ok(Json(response))
}

async fn delete_ruta(
    State(state): State<AppState>,
    Path(id_ruta): Path<String>,
) -> Result<Json<RutaMensajeResponse>, AppError> {
    let controller = RutaController::new(state.store.clone());
    let response = controller.delete(&id_ruta).await?;
    Ok(Json(response))
}

async fn list_rutas_by_zona(
    State(state): State<AppState>,
    Path(id_zona): Path<String>,
) -> Result<Json<Vec<RutaDocumento>>, AppError> {
    let controller = RutaController::new(state.store.clone());
    let response = controller.list_by_zona(&id_zona).await?;
    Ok(Json(response))
}
