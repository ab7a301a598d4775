//! API de zonas y rutas
//!
//! CRUD HTTP de zonas geográficas y de las rutas asociadas a ellas,
//! sobre un almacén de documentos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
