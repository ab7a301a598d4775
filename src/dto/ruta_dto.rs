use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::models::Ubicacion;

// Request para crear una ruta
#[derive(Debug, Default, Deserialize)]
pub struct CreateRutaRequest {
    pub nombre_ruta: Option<String>,
    pub id_zona_asociada: Option<String>,
    pub ubicaciones: Option<Vec<Ubicacion>>,
}

// Request para actualizar una ruta: cualquier campo adicional se guarda tal cual.
// `None` = campo ausente, `Some(None)` = `null` explícito
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRutaRequest {
    #[serde(default, deserialize_with = "presente")]
    pub nombre_ruta: Option<Option<String>>,
    #[serde(default, deserialize_with = "presente")]
    pub id_zona_asociada: Option<Option<String>>,
    #[serde(default, deserialize_with = "presente")]
    pub ubicaciones: Option<Option<Vec<Ubicacion>>>,
    #[serde(flatten)]
    pub otros_campos: Map<String, Value>,
}

fn presente<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// Response de create/update/delete
#[derive(Debug, Serialize)]
pub struct RutaMensajeResponse {
    pub mensaje: String,
    pub id_ruta: String,
}
