//! Repositorios
//!
//! Traducen las operaciones CRUD del dominio a operaciones del almacén de
//! documentos.

pub mod ruta_repository;
pub mod zona_repository;

pub use ruta_repository::RutaRepository;
pub use zona_repository::ZonaRepository;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::database::{Document, DocumentStore, StoreError, StoreResult};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::ids::{generate_short_id, MAX_ATTEMPTS};

/// Serializar un registro como objeto JSON para el almacén
pub(crate) fn to_record<T: Serialize>(value: &T) -> StoreResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Decode(serde::ser::Error::custom(format!(
            "se esperaba un objeto JSON, se obtuvo {}",
            other
        )))),
    }
}

/// Decodificar el contenido de un documento
pub(crate) fn from_document<T: DeserializeOwned>(doc: Document) -> StoreResult<(String, T)> {
    let record = serde_json::from_value(Value::Object(doc.data))?;
    Ok((doc.id, record))
}

/// Buscar una clave natural `<prefijo><100..=999>` que no exista todavía
pub(crate) async fn unused_short_id(
    store: &dyn DocumentStore,
    collection: &str,
    field: &str,
    prefix: &'static str,
) -> AppResult<String> {
    for _ in 0..MAX_ATTEMPTS {
        let candidate = generate_short_id(prefix);
        let existing = store
            .query_eq(collection, field, &Value::String(candidate.clone()))
            .await?;
        if existing.is_empty() {
            return Ok(candidate);
        }
        warn!("🔁 Identificador {} ya existe en '{}', generando otro", candidate, collection);
    }
    Err(AppError::IdentifiersExhausted(prefix))
}
