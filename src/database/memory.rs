//! Almacén de documentos en memoria
//!
//! Pensado para desarrollo local (`DOCUMENT_STORE=memory`) y para los tests.
//! Los datos se pierden al terminar el proceso.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::document_store::{Document, DocumentStore, StoreError, StoreResult};

#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn add(&self, collection: &str, record: Map<String, Value>) -> StoreResult<String> {
        let id = Uuid::new_v4().simple().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id.clone(), record));
        Ok(id)
    }

    async fn get_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn query_eq(&self, collection: &str, field: &str, value: &Value) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let matches = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| doc.data.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(matches)
    }

    async fn update(&self, collection: &str, doc_id: &str, partial: Map<String, Value>) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == doc_id))
            .ok_or_else(|| StoreError::DocumentNotFound(doc_id.to_string(), collection.to_string()))?;

        for (key, value) in partial {
            doc.data.insert(key, value);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, doc_id: &str) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.retain(|doc| doc.id != doc_id);
        }
        Ok(())
    }
}
