use std::sync::Arc;

use crate::database::DocumentStore;
use crate::dto::zona_dto::{CreateZonaRequest, UpdateZonaRequest, ZonaMensajeResponse};
use crate::models::ZonaDocumento;
use crate::repositories::ZonaRepository;
use crate::utils::errors::{not_found_error, AppResult};

const ZONA_NO_ENCONTRADA: &str = "No se encontró la zona con el ID especificado";

pub struct ZonaController {
    repository: ZonaRepository,
}

impl ZonaController {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: ZonaRepository::new(store),
        }
    }

    pub async fn create(&self, request: CreateZonaRequest) -> AppResult<ZonaMensajeResponse> {
        let zona = self
            .repository
            .create(request)
            .await
            .map_err(|e| e.during("Error al crear la zona"))?;

        Ok(ZonaMensajeResponse {
            mensaje: "Zona creada exitosamente".to_string(),
            id_zona: zona.id_zona,
        })
    }

    pub async fn list(&self) -> AppResult<Vec<ZonaDocumento>> {
        self.repository
            .get_all()
            .await
            .map_err(|e| e.during("Error al obtener las zonas"))
    }

    pub async fn get_by_id(&self, id_zona: &str) -> AppResult<ZonaDocumento> {
        self.repository
            .get_by_id(id_zona)
            .await
            .map_err(|e| e.during("Error al obtener la zona"))?
            .ok_or_else(|| not_found_error(ZONA_NO_ENCONTRADA))
    }

    pub async fn update(&self, id_zona: &str, request: UpdateZonaRequest) -> AppResult<ZonaMensajeResponse> {
        self.repository
            .update(id_zona, request)
            .await
            .map_err(|e| e.during("Error al actualizar la zona"))?
            .ok_or_else(|| not_found_error(ZONA_NO_ENCONTRADA))?;

        Ok(ZonaMensajeResponse {
            mensaje: "Zona actualizada exitosamente".to_string(),
            id_zona: id_zona.to_string(),
        })
    }

    pub async fn delete(&self, id_zona: &str) -> AppResult<ZonaMensajeResponse> {
        let eliminada = self
            .repository
            .delete(id_zona)
            .await
            .map_err(|e| e.during("Error al eliminar la zona"))?;

        if !eliminada {
            return Err(not_found_error(ZONA_NO_ENCONTRADA));
        }

        Ok(ZonaMensajeResponse {
            mensaje: "Zona eliminada exitosamente".to_string(),
            id_zona: id_zona.to_string(),
        })
    }
}
