//! Identificadores cortos del dominio
//!
//! Las claves naturales tienen la forma `<prefijo><100..=999>` (`me482`,
//! `rut137`). El espacio es de 900 valores, así que el repositorio comprueba
//! cada candidato contra el almacén antes de usarlo.

use rand::Rng;

pub const ZONA_PREFIX: &str = "me";
pub const RUTA_PREFIX: &str = "rut";

/// Intentos antes de dar por agotado el espacio de identificadores
pub const MAX_ATTEMPTS: usize = 32;

const MIN_SUFFIX: u16 = 100;
const MAX_SUFFIX: u16 = 999;

/// Generar un candidato con el prefijo dado
pub fn generate_short_id(prefix: &str) -> String {
    generate_short_id_with(prefix, &mut rand::thread_rng())
}

pub fn generate_short_id_with<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    format!("{}{}", prefix, rng.gen_range(MIN_SUFFIX..=MAX_SUFFIX))
}

/// Verificar que un identificador tiene la forma `<prefijo><100..=999>`
pub fn is_short_id(prefix: &str, id: &str) -> bool {
    id.strip_prefix(prefix)
        .filter(|digits| digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<u16>().ok())
        .map(|n| (MIN_SUFFIX..=MAX_SUFFIX).contains(&n))
        .unwrap_or(false)
}
