//! Almacén de documentos sobre PostgreSQL
//!
//! Todas las colecciones comparten la tabla `documentos`; el contenido de cada
//! documento vive en una columna JSONB.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use super::document_store::{Document, DocumentStore, StoreError, StoreResult};
use crate::config::database::DatabaseConfig;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS documentos (
        id UUID PRIMARY KEY,
        coleccion TEXT NOT NULL,
        datos JSONB NOT NULL,
        creado_en TIMESTAMPTZ NOT NULL
    )
"#;

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documentos_coleccion_idx ON documentos (coleccion, creado_en)";

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Conectar usando la configuración y preparar el esquema
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        info!("🔗 Conectando a PostgreSQL: {}", mask_database_url(&config.url));

        let pool = config
            .create_pool()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let store = Self::new(pool);
        store.ensure_schema().await?;

        info!("✅ Almacén de documentos listo");
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

fn parse_doc_id(doc_id: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(doc_id).map_err(|_| StoreError::InvalidDocumentId(doc_id.to_string()))
}

fn into_document((id, datos): (Uuid, Value)) -> StoreResult<Document> {
    match datos {
        Value::Object(data) => Ok(Document::new(id.to_string(), data)),
        other => Err(StoreError::Decode(serde::de::Error::custom(format!(
            "se esperaba un objeto JSON en el documento {}, se encontró {}",
            id, other
        )))),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn add(&self, collection: &str, record: Map<String, Value>) -> StoreResult<String> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documentos (id, coleccion, datos, creado_en) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(collection)
            .bind(Value::Object(record))
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        debug!("📥 Documento {} insertado en '{}'", id, collection);
        Ok(id.to_string())
    }

    async fn get_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let rows = sqlx::query_as::<_, (Uuid, Value)>(
            "SELECT id, datos FROM documentos WHERE coleccion = $1 ORDER BY creado_en, id",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(into_document).collect()
    }

    async fn query_eq(&self, collection: &str, field: &str, value: &Value) -> StoreResult<Vec<Document>> {
        let rows = sqlx::query_as::<_, (Uuid, Value)>(
            "SELECT id, datos FROM documentos WHERE coleccion = $1 AND datos -> $2 = $3 ORDER BY creado_en, id",
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(into_document).collect()
    }

    async fn update(&self, collection: &str, doc_id: &str, partial: Map<String, Value>) -> StoreResult<()> {
        let id = parse_doc_id(doc_id)?;

        let result = sqlx::query("UPDATE documentos SET datos = datos || $3 WHERE coleccion = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .bind(Value::Object(partial))
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::DocumentNotFound(doc_id.to_string(), collection.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, doc_id: &str) -> StoreResult<()> {
        let id = parse_doc_id(doc_id)?;

        // Borrar un documento inexistente no es un error
        sqlx::query("DELETE FROM documentos WHERE coleccion = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    if scheme_end > at_pos || url[scheme_end..at_pos].is_empty() {
        return url.to_string();
    }
    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
