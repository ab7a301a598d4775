//! Modelos del sistema
//! 
//! Registros de zonas y rutas tal como viven en el almacén de documentos.

pub mod ruta;
pub mod zona;

pub use ruta::*;
pub use zona::*;
