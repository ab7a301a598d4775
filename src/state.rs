//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::database::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    /// Conexión al almacén, creada una vez al arrancar
    pub store: Arc<dyn DocumentStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
