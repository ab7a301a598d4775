//! Módulo de base de datos
//! 
//! Define el contrato del almacén de documentos y sus backends
//! (PostgreSQL con JSONB y memoria local).

pub mod document_store;
pub mod connection;
pub mod memory;

pub use connection::PgDocumentStore;
pub use document_store::{Document, DocumentStore, StoreError, StoreResult};
pub use memory::MemoryDocumentStore;
