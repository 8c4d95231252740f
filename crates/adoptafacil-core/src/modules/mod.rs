//! Core modules for the AdoptaFácil client.

pub mod catalogo;
pub mod config;
pub mod form;
pub mod imagenes;
pub mod reporte;
pub mod session;
pub mod store;
