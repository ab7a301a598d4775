use serde::{Deserialize, Serialize};

pub const COLECCION_ZONAS: &str = "zonas";

/// Zona tal como se guarda en el almacén
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zona {
    pub id_zona: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre_zona: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(default)]
    pub municipios_incluidos: Vec<String>,
    #[serde(default)]
    pub codigos_postales_relacionados: Vec<String>,
}

/// Zona acompañada del identificador interno del documento
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZonaDocumento {
    pub id: String,
    #[serde(flatten)]
    pub zona: Zona,
}

/// Campos de una zona que se pueden modificar
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ZonaCambios {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre_zona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipios_incluidos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigos_postales_relacionados: Option<Vec<String>>,
}

impl ZonaCambios {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Resultado de una actualización: la clave natural y los campos aplicados
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZonaActualizada {
    pub id_zona: String,
    #[serde(flatten)]
    pub cambios: ZonaCambios,
}
