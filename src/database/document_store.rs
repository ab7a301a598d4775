//! Contrato del almacén de documentos
//! 
//! Un almacén sin esquema organizado en colecciones. Cada documento lleva un
//! identificador opaco asignado por el almacén, distinto de la clave natural
//! del dominio (`id_zona`, `id_ruta`).

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errores del almacén de documentos
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Error de conexión con el almacén: {0}")]
    Connection(String),

    #[error("Error en la consulta: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Documento '{0}' no encontrado en la colección '{1}'")]
    DocumentNotFound(String, String),

    #[error("Identificador de documento inválido: {0}")]
    InvalidDocumentId(String),

    #[error("Documento mal formado: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Documento tal como lo devuelve el almacén
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Map<String, Value>) -> Self {
        Self { id: id.into(), data }
    }
}

/// Operaciones por colección. Las listas se devuelven en el orden del almacén
/// (orden de inserción en todos los backends).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserta un documento nuevo y devuelve su identificador opaco
    async fn add(&self, collection: &str, record: Map<String, Value>) -> StoreResult<String>;

    /// Todos los documentos de la colección
    async fn get_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Documentos cuyo campo `field` es igual a `value`
    async fn query_eq(&self, collection: &str, field: &str, value: &Value) -> StoreResult<Vec<Document>>;

    /// Sobrescribe solo los campos presentes en `partial`
    async fn update(&self, collection: &str, doc_id: &str, partial: Map<String, Value>) -> StoreResult<()>;

    async fn delete(&self, collection: &str, doc_id: &str) -> StoreResult<()>;
}
