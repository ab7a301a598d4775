use serde::{Deserialize, Serialize};

// Request para crear una zona
#[derive(Debug, Default, Deserialize)]
pub struct CreateZonaRequest {
    pub nombre_zona: Option<String>,
    pub estado: Option<String>,
    pub municipios_incluidos: Option<Vec<String>>,
    pub codigos_postales_relacionados: Option<Vec<String>>,
}

// Request para actualizar una zona
#[derive(Debug, Default, Deserialize)]
pub struct UpdateZonaRequest {
    pub nombre_zona: Option<String>,
    pub estado: Option<String>,
    pub municipios_incluidos: Option<Vec<String>>,
    pub codigos_postales_relacionados: Option<Vec<String>>,
}

// Response de create/update/delete
#[derive(Debug, Serialize)]
pub struct ZonaMensajeResponse {
    pub mensaje: String,
    pub id_zona: String,
}
