//! Controladores
//!
//! Adaptan los resultados de los repositorios a respuestas de la API:
//! mensajes de éxito, 404 y errores anotados con la acción.

pub mod ruta_controller;
pub mod zona_controller;

pub use ruta_controller::RutaController;
pub use zona_controller::ZonaController;
