use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use super::{from_document, to_record, unused_short_id};
use crate::database::{Document, DocumentStore};
use crate::dto::ruta_dto::{CreateRutaRequest, UpdateRutaRequest};
use crate::models::{Ruta, RutaActualizada, RutaCambios, RutaDocumento, COLECCION_RUTAS};
use crate::utils::dates::today;
use crate::utils::errors::AppResult;
use crate::utils::ids::RUTA_PREFIX;

/// Campos que una actualización no puede tocar
const CAMPOS_INMUTABLES: [&str; 4] = ["id", "id_ruta", "fecha_creacion", "fecha_actualizacion"];

pub struct RutaRepository {
    store: Arc<dyn DocumentStore>,
}

impl RutaRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateRutaRequest) -> AppResult<Ruta> {
        let id_ruta = unused_short_id(self.store.as_ref(), COLECCION_RUTAS, "id_ruta", RUTA_PREFIX).await?;

        let ruta = Ruta {
            id_ruta,
            nombre_ruta: request.nombre_ruta,
            id_zona_asociada: request.id_zona_asociada,
            ubicaciones: request.ubicaciones,
            fecha_creacion: today(),
            fecha_actualizacion: None,
            otros_campos: Default::default(),
        };

        let doc_id = self.store.add(COLECCION_RUTAS, to_record(&ruta)?).await?;
        info!("🛣️ Ruta {} creada (documento {})", ruta.id_ruta, doc_id);

        Ok(ruta)
    }

    pub async fn get_all(&self) -> AppResult<Vec<RutaDocumento>> {
        let docs = self.store.get_all(COLECCION_RUTAS).await?;
        debug!("📋 {} rutas encontradas", docs.len());
        into_documentos(docs)
    }

    pub async fn get_by_id(&self, id_ruta: &str) -> AppResult<Option<RutaDocumento>> {
        let docs = self.find("id_ruta", id_ruta).await?;

        match docs.into_iter().next() {
            Some(doc) => {
                let (id, ruta) = from_document(doc)?;
                Ok(Some(RutaDocumento { id, ruta }))
            }
            None => Ok(None),
        }
    }

    /// Guardar todos los campos recibidos y sellar `fecha_actualizacion`
    pub async fn update(&self, id_ruta: &str, request: UpdateRutaRequest) -> AppResult<Option<RutaActualizada>> {
        let docs = self.find("id_ruta", id_ruta).await?;
        let Some(doc) = docs.into_iter().next() else {
            return Ok(None);
        };

        let mut otros_campos = request.otros_campos;
        for campo in CAMPOS_INMUTABLES {
            if otros_campos.remove(campo).is_some() {
                debug!("Campo '{}' ignorado al actualizar la ruta {}", campo, id_ruta);
            }
        }

        let cambios = RutaCambios {
            nombre_ruta: request.nombre_ruta,
            id_zona_asociada: request.id_zona_asociada,
            ubicaciones: request.ubicaciones,
            otros_campos,
            fecha_actualizacion: today(),
        };

        self.store.update(COLECCION_RUTAS, &doc.id, to_record(&cambios)?).await?;
        info!("✏️ Ruta {} actualizada", id_ruta);

        Ok(Some(RutaActualizada {
            id_ruta: id_ruta.to_string(),
            cambios,
        }))
    }

    /// Eliminar la primera ruta con esa clave
    pub async fn delete(&self, id_ruta: &str) -> AppResult<bool> {
        let docs = self.find("id_ruta", id_ruta).await?;
        let Some(doc) = docs.first() else {
            return Ok(false);
        };

        self.store.delete(COLECCION_RUTAS, &doc.id).await?;
        info!("🗑️ Ruta {} eliminada", id_ruta);
        Ok(true)
    }

    /// Rutas cuyo `id_zona_asociada` es la zona dada. No se comprueba que la
    /// zona exista.
    pub async fn get_rutas_by_zona(&self, id_zona: &str) -> AppResult<Vec<RutaDocumento>> {
        let docs = self.find("id_zona_asociada", id_zona).await?;
        debug!("📋 {} rutas para la zona {}", docs.len(), id_zona);
        into_documentos(docs)
    }

    async fn find(&self, field: &str, value: &str) -> AppResult<Vec<Document>> {
        let docs = self
            .store
            .query_eq(COLECCION_RUTAS, field, &Value::String(value.to_string()))
            .await?;
        Ok(docs)
    }
}

fn into_documentos(docs: Vec<Document>) -> AppResult<Vec<RutaDocumento>> {
    let rutas = docs
        .into_iter()
        .map(|doc| from_document(doc).map(|(id, ruta)| RutaDocumento { id, ruta }))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rutas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryDocumentStore;
    use crate::models::{Coordenadas, Ubicacion};
    use crate::utils::ids::is_short_id;
    use serde_json::{json, Map};

    fn repository() -> (MemoryDocumentStore, RutaRepository) {
        let store = MemoryDocumentStore::new();
        (store.clone(), RutaRepository::new(Arc::new(store)))
    }

    fn ruta(nombre: &str, zona: &str) -> CreateRutaRequest {
        CreateRutaRequest {
            nombre_ruta: Some(nombre.to_string()),
            id_zona_asociada: Some(zona.to_string()),
            ubicaciones: Some(vec![Ubicacion {
                descripcion_punto: "Zócalo".to_string(),
                coordenadas: Coordenadas { latitud: 19.4326, longitud: -99.1332 },
            }]),
        }
    }

    #[tokio::test]
    async fn test_create_stamps_creation_date() {
        let (_, repo) = repository();
        let creada = repo.create(ruta("Norte", "me101")).await.unwrap();

        assert!(is_short_id("rut", &creada.id_ruta));
        assert_eq!(creada.fecha_creacion, today());
        assert!(creada.fecha_actualizacion.is_none());

        let found = repo.get_by_id(&creada.id_ruta).await.unwrap().unwrap();
        assert_eq!(found.ruta, creada);
    }

    #[tokio::test]
    async fn test_update_merges_every_field_and_stamps_date() {
        let (_, repo) = repository();
        let creada = repo.create(ruta("Norte", "me101")).await.unwrap();

        let mut otros = Map::new();
        otros.insert("prioridad".into(), json!("alta"));
        otros.insert("id_ruta".into(), json!("rut000"));
        let result = repo
            .update(
                &creada.id_ruta,
                UpdateRutaRequest {
                    nombre_ruta: Some(Some("Norte 2".into())),
                    otros_campos: otros,
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.cambios.fecha_actualizacion, today());
        assert_eq!(result.cambios.otros_campos.get("prioridad"), Some(&json!("alta")));
        assert!(!result.cambios.otros_campos.contains_key("id_ruta"));

        let stored = repo.get_by_id(&creada.id_ruta).await.unwrap().unwrap().ruta;
        assert_eq!(stored.id_ruta, creada.id_ruta);
        assert_eq!(stored.nombre_ruta.as_deref(), Some("Norte 2"));
        assert_eq!(stored.id_zona_asociada.as_deref(), Some("me101"));
        assert_eq!(stored.ubicaciones, creada.ubicaciones);
        assert_eq!(stored.fecha_creacion, creada.fecha_creacion);
        assert_eq!(stored.fecha_actualizacion, Some(today()));
        assert_eq!(stored.otros_campos.get("prioridad"), Some(&json!("alta")));
    }

    #[tokio::test]
    async fn test_update_stores_explicit_nulls() {
        let (store, repo) = repository();
        let creada = repo.create(ruta("Norte", "me101")).await.unwrap();

        let request: UpdateRutaRequest =
            serde_json::from_value(json!({"nombre_ruta": null, "extra": null})).unwrap();
        repo.update(&creada.id_ruta, request).await.unwrap().unwrap();

        let docs = store.query_eq(COLECCION_RUTAS, "id_ruta", &json!(creada.id_ruta)).await.unwrap();
        assert_eq!(docs[0].data.get("nombre_ruta"), Some(&Value::Null));
        assert_eq!(docs[0].data.get("extra"), Some(&Value::Null));
        assert_eq!(docs[0].data.get("id_zona_asociada"), Some(&json!("me101")));

        let stored = repo.get_by_id(&creada.id_ruta).await.unwrap().unwrap().ruta;
        assert!(stored.nombre_ruta.is_none());
        assert_eq!(stored.ubicaciones, creada.ubicaciones);
    }

    #[tokio::test]
    async fn test_update_missing_route() {
        let (_, repo) = repository();
        assert!(repo.update("rut100", UpdateRutaRequest::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_first_match_only() {
        let (store, repo) = repository();
        for n in 0..2 {
            let mut record = Map::new();
            record.insert("id_ruta".into(), json!("rut777"));
            record.insert("fecha_creacion".into(), json!("2024-01-01"));
            record.insert("n".into(), json!(n));
            store.add(COLECCION_RUTAS, record).await.unwrap();
        }

        assert!(repo.delete("rut777").await.unwrap());

        let restante = repo.get_by_id("rut777").await.unwrap().unwrap();
        assert_eq!(restante.ruta.otros_campos.get("n"), Some(&json!(1)));
        assert!(repo.delete("rut777").await.unwrap());
        assert!(!repo.delete("rut777").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_rutas_by_zona() {
        let (_, repo) = repository();
        let a = repo.create(ruta("A", "me101")).await.unwrap();
        repo.create(ruta("B", "me202")).await.unwrap();
        let c = repo.create(ruta("C", "me101")).await.unwrap();

        let rutas = repo.get_rutas_by_zona("me101").await.unwrap();
        let ids: Vec<_> = rutas.iter().map(|r| r.ruta.id_ruta.as_str()).collect();
        assert_eq!(ids, vec![a.id_ruta.as_str(), c.id_ruta.as_str()]);

        assert!(repo.get_rutas_by_zona("me999").await.unwrap().is_empty());
    }
}
