use std::sync::Arc;

use crate::database::DocumentStore;
use crate::dto::ruta_dto::{CreateRutaRequest, RutaMensajeResponse, UpdateRutaRequest};
use crate::models::RutaDocumento;
use crate::repositories::RutaRepository;
use crate::utils::errors::{not_found_error, AppResult};

const RUTA_NO_ENCONTRADA: &str = "No se encontró la ruta con el ID especificado";

pub struct RutaController {
    repository: RutaRepository,
}

impl RutaController {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: RutaRepository::new(store),
        }
    }

    pub async fn create(&self, request: CreateRutaRequest) -> AppResult<RutaMensajeResponse> {
        let ruta = self
            .repository
            .create(request)
            .await
            .map_err(|e| e.during("Error al crear la ruta"))?;

        Ok(RutaMensajeResponse {
            mensaje: "Ruta creada exitosamente".to_string(),
            id_ruta: ruta.id_ruta,
        })
    }

    pub async fn list(&self) -> AppResult<Vec<RutaDocumento>> {
        self.repository
            .get_all()
            .await
            .map_err(|e| e.during("Error al obtener las rutas"))
    }

    pub async fn get_by_id(&self, id_ruta: &str) -> AppResult<RutaDocumento> {
        self.repository
            .get_by_id(id_ruta)
            .await
            .map_err(|e| e.during("Error al obtener la ruta"))?
            .ok_or_else(|| not_found_error(RUTA_NO_ENCONTRADA))
    }

    pub async fn update(&self, id_ruta: &str, request: UpdateRutaRequest) -> AppResult<RutaMensajeResponse> {
        self.repository
            .update(id_ruta, request)
            .await
            .map_err(|e| e.during("Error al actualizar la ruta"))?
            .ok_or_else(|| not_found_error(RUTA_NO_ENCONTRADA))?;

        Ok(RutaMensajeResponse {
            mensaje: "Ruta actualizada exitosamente".to_string(),
            id_ruta: id_ruta.to_string(),
        })
    }

    pub async fn delete(&self, id_ruta: &str) -> AppResult<RutaMensajeResponse> {
        let eliminada = self
            .repository
            .delete(id_ruta)
            .await
            .map_err(|e| e.during("Error al eliminar la ruta"))?;

        if !eliminada {
            return Err(not_found_error(RUTA_NO_ENCONTRADA));
        }

        Ok(RutaMensajeResponse {
            mensaje: "Ruta eliminada exitosamente".to_string(),
            id_ruta: id_ruta.to_string(),
        })
    }

    pub async fn list_by_zona(&self, id_zona: &str) -> AppResult<Vec<RutaDocumento>> {
        self.repository
            .get_rutas_by_zona(id_zona)
            .await
            .map_err(|e| e.during("Error al obtener las rutas por zona"))
    }
}
