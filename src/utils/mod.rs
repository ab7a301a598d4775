//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, generación de
//! identificadores cortos y fechas.

pub mod body;
pub mod dates;
pub mod errors;
pub mod ids;
