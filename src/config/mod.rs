//! Configuración del proyecto
//! 
//! Este módulo contiene la configuración de base de datos y variables de entorno.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::*;

use thiserror::Error;

/// Errores al leer la configuración de arranque
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Leer y parsear una variable, usando `default` si no existe
pub(crate) fn parse_var<T, F>(
    lookup: &F,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|_| ConfigError::Invalid { name, expected, value })
        }
        _ => Ok(default),
    }
}
