//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::database::StoreError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Document store error: {0}")]
    Store(#[from] StoreError),

    #[error("No hay identificadores libres con prefijo '{0}'")]
    IdentifiersExhausted(&'static str),

    /// Fallo de una operación, con el mensaje propio de la acción
    #[error("{accion}: {detalle}")]
    Operation { accion: String, detalle: String },

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Anotar un fallo con el mensaje de la acción que lo produjo.
    /// `NotFound` y `BadRequest` se conservan tal cual.
    pub fn during(self, accion: &str) -> Self {
        match self {
            AppError::NotFound(_) | AppError::BadRequest(_) | AppError::Operation { .. } => self,
            AppError::Store(e) => AppError::Operation {
                accion: accion.to_string(),
                detalle: e.to_string(),
            },
            e @ AppError::IdentifiersExhausted(_) => AppError::Operation {
                accion: accion.to_string(),
                detalle: e.to_string(),
            },
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detalle: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::NotFound(msg) => {
                warn!("Recurso no encontrado: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse { error: msg, detalle: None },
                )
            }

            AppError::Store(e) => {
                error!("Error del almacén de documentos: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Error del almacén de documentos".to_string(),
                        detalle: Some(e.to_string()),
                    },
                )
            }

            e @ AppError::IdentifiersExhausted(_) => {
                error!("{}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Error al generar el identificador".to_string(),
                        detalle: Some(e.to_string()),
                    },
                )
            }

            AppError::Operation { accion, detalle } => {
                error!("{}: {}", accion, detalle);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse { error: accion, detalle: Some(detalle) },
                )
            }

            AppError::BadRequest(msg) => {
                warn!("Solicitud incorrecta: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Cuerpo de la solicitud inválido".to_string(),
                        detalle: Some(msg),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_has_no_detail() {
        let response = not_found_error("No se encontró la zona con el ID especificado").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "No se encontró la zona con el ID especificado"})
        );
    }

    #[tokio::test]
    async fn test_store_failure_carries_action_and_detail() {
        let err = AppError::from(StoreError::Connection("tiempo de espera agotado".into()))
            .during("Error al crear la zona");
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Error al crear la zona");
        assert_eq!(body["detalle"], "Error de conexión con el almacén: tiempo de espera agotado");
    }

    #[test]
    fn test_during_keeps_not_found() {
        let err = not_found_error("nada").during("Error al eliminar la zona");
        assert!(matches!(err, AppError::NotFound(msg) if msg == "nada"));
    }

    #[test]
    fn test_during_wraps_exhausted_identifiers() {
        let err = AppError::IdentifiersExhausted("me").during("Error al crear la zona");
        match err {
            AppError::Operation { accion, detalle } => {
                assert_eq!(accion, "Error al crear la zona");
                assert!(detalle.contains("'me'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
