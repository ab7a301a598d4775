use std::sync::Arc;

use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, info};

use super::{from_document, to_record, unused_short_id};
use crate::database::{Document, DocumentStore};
use crate::dto::zona_dto::{CreateZonaRequest, UpdateZonaRequest};
use crate::models::{Zona, ZonaActualizada, ZonaCambios, ZonaDocumento, COLECCION_ZONAS};
use crate::utils::errors::AppResult;
use crate::utils::ids::ZONA_PREFIX;

pub struct ZonaRepository {
    store: Arc<dyn DocumentStore>,
}

impl ZonaRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Crear una zona con una clave `me###` nueva. Las listas omitidas se
    /// guardan vacías; nombre y estado se guardan tal como llegan.
    pub async fn create(&self, request: CreateZonaRequest) -> AppResult<Zona> {
        let id_zona = unused_short_id(self.store.as_ref(), COLECCION_ZONAS, "id_zona", ZONA_PREFIX).await?;

        let zona = Zona {
            id_zona,
            nombre_zona: request.nombre_zona,
            estado: request.estado,
            municipios_incluidos: request.municipios_incluidos.unwrap_or_default(),
            codigos_postales_relacionados: request.codigos_postales_relacionados.unwrap_or_default(),
        };

        let doc_id = self.store.add(COLECCION_ZONAS, to_record(&zona)?).await?;
        info!("📍 Zona {} creada (documento {})", zona.id_zona, doc_id);

        Ok(zona)
    }

    pub async fn get_all(&self) -> AppResult<Vec<ZonaDocumento>> {
        let docs = self.store.get_all(COLECCION_ZONAS).await?;
        debug!("📋 {} zonas encontradas", docs.len());

        let zonas = docs
            .into_iter()
            .map(|doc| from_document(doc).map(|(id, zona)| ZonaDocumento { id, zona }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(zonas)
    }

    pub async fn get_by_id(&self, id_zona: &str) -> AppResult<Option<ZonaDocumento>> {
        let docs = self.find(id_zona).await?;

        match docs.into_iter().next() {
            Some(doc) => {
                let (id, zona) = from_document(doc)?;
                Ok(Some(ZonaDocumento { id, zona }))
            }
            None => Ok(None),
        }
    }

    /// Actualizar los campos de la zona que lleguen con valor. Cadenas y
    /// listas vacías se ignoran igual que los campos omitidos.
    pub async fn update(&self, id_zona: &str, request: UpdateZonaRequest) -> AppResult<Option<ZonaActualizada>> {
        let docs = self.find(id_zona).await?;
        let Some(doc) = docs.into_iter().next() else {
            return Ok(None);
        };

        let cambios = ZonaCambios {
            nombre_zona: request.nombre_zona.filter(|s| !s.is_empty()),
            estado: request.estado.filter(|s| !s.is_empty()),
            municipios_incluidos: request.municipios_incluidos.filter(|v| !v.is_empty()),
            codigos_postales_relacionados: request.codigos_postales_relacionados.filter(|v| !v.is_empty()),
        };

        if cambios.is_empty() {
            debug!("Zona {} sin campos con valor para actualizar", id_zona);
        }

        self.store.update(COLECCION_ZONAS, &doc.id, to_record(&cambios)?).await?;
        info!("✏️ Zona {} actualizada", id_zona);

        Ok(Some(ZonaActualizada {
            id_zona: id_zona.to_string(),
            cambios,
        }))
    }

    /// Eliminar todas las zonas con esa clave (puede haber duplicados).
    /// Devuelve `false` si no había ninguna.
    pub async fn delete(&self, id_zona: &str) -> AppResult<bool> {
        let docs = self.find(id_zona).await?;
        if docs.is_empty() {
            return Ok(false);
        }

        let deletes = docs.iter().map(|doc| self.store.delete(COLECCION_ZONAS, &doc.id));
        try_join_all(deletes).await?;

        info!("🗑️ Zona {} eliminada ({} documentos)", id_zona, docs.len());
        Ok(true)
    }

    async fn find(&self, id_zona: &str) -> AppResult<Vec<Document>> {
        let docs = self
            .store
            .query_eq(COLECCION_ZONAS, "id_zona", &Value::String(id_zona.to_string()))
            .await?;
        Ok(docs)
    }
}
