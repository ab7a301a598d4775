use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const COLECCION_RUTAS: &str = "rutas";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordenadas {
    pub latitud: f64,
    pub longitud: f64,
}

/// Punto de una ruta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ubicacion {
    pub descripcion_punto: String,
    pub coordenadas: Coordenadas,
}

/// Ruta tal como se guarda en el almacén.
///
/// Las actualizaciones aceptan campos fuera del modelo; se conservan en
/// `otros_campos` para devolverlos tal cual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruta {
    pub id_ruta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_ruta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_zona_asociada: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ubicaciones: Option<Vec<Ubicacion>>,
    pub fecha_creacion: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_actualizacion: Option<NaiveDate>,
    #[serde(flatten)]
    pub otros_campos: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RutaDocumento {
    pub id: String,
    #[serde(flatten)]
    pub ruta: Ruta,
}

/// Campos enviados en una actualización de ruta, más la fecha de actualización.
/// `Some(None)` se guarda como `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RutaCambios {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_ruta: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_zona_asociada: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ubicaciones: Option<Option<Vec<Ubicacion>>>,
    #[serde(flatten)]
    pub otros_campos: Map<String, Value>,
    pub fecha_actualizacion: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RutaActualizada {
    pub id_ruta: String,
    #[serde(flatten)]
    pub cambios: RutaCambios,
}
