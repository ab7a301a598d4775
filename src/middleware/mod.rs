//! Middleware del sistema
//! 
//! CORS y registro de requests.

pub mod cors;
pub mod trace;

pub use cors::*;
pub use trace::*;
