//! Cuerpos de request y response de la API

pub mod ruta_dto;
pub mod zona_dto;
