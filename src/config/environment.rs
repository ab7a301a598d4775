//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::fmt;
use std::str::FromStr;

use super::{parse_var, ConfigError, DatabaseConfig};

/// Backend del almacén de documentos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "memoria" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => write!(f, "postgres"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: tracing::Level,
    pub cors_origins: Vec<String>,
    pub store_backend: StoreBackend,
    /// Solo presente cuando el backend es PostgreSQL
    pub database: Option<DatabaseConfig>,
}

/// Configuración local sin variables de entorno: usa el almacén en memoria
/// para no requerir `DATABASE_URL`. `from_env` usa PostgreSQL por defecto.
impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: tracing::Level::DEBUG,
            cors_origins: Vec::new(),
            store_backend: StoreBackend::Memory,
            database: None,
        }
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = parse_var(&lookup, "DOCUMENT_STORE", "store backend (postgres|memory)", StoreBackend::Postgres)?;
        let database = match store_backend {
            StoreBackend::Postgres => Some(DatabaseConfig::from_lookup(&lookup)?),
            StoreBackend::Memory => None,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            port: parse_var(&lookup, "PORT", "port number", 3000)?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            log_level: parse_var(&lookup, "LOG_LEVEL", "log level", tracing::Level::DEBUG)?,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            store_backend,
            database,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_memory_backend_needs_no_database() {
        let config = EnvironmentConfig::from_lookup(lookup(&[("DOCUMENT_STORE", "memory")])).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.database.is_none());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert!(config.is_development());
    }

    #[test]
    fn test_postgres_is_default_backend() {
        let result = EnvironmentConfig::from_lookup(lookup(&[]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("DATABASE_URL"));

        let config = EnvironmentConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db/zonas")])).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.database.unwrap().url, "postgres://db/zonas");
    }

    #[test]
    fn test_default_is_self_contained() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.database.is_none());
        assert!(config.is_development());
    }

    #[test]
    fn test_parses_values() {
        let config = EnvironmentConfig::from_lookup(lookup(&[
            ("DOCUMENT_STORE", "memory"),
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("LOG_LEVEL", "warn"),
            ("CORS_ORIGINS", "https://a.mx, https://b.mx,"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.log_level, tracing::Level::WARN);
        assert_eq!(config.cors_origins, vec!["https://a.mx", "https://b.mx"]);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let bad_port = EnvironmentConfig::from_lookup(lookup(&[("DOCUMENT_STORE", "memory"), ("PORT", "abc")]));
        assert!(matches!(bad_port, Err(ConfigError::Invalid { name: "PORT", .. })));

        let bad_backend = EnvironmentConfig::from_lookup(lookup(&[("DOCUMENT_STORE", "firestore")]));
        assert!(matches!(bad_backend, Err(ConfigError::Invalid { name: "DOCUMENT_STORE", .. })));
    }
}
