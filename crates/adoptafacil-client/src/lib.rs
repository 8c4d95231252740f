//! # AdoptaFácil Client
//!
//! Async SDK for the AdoptaFácil HTTP backend.
//!
//! [`AdoptaFacilClient`] covers the five backend resources (pets, persons,
//! donations, adoption requests, auth) with the error taxonomy the screens
//! react to; [`MascotaSync`] ties the pet gateway to the shared in-memory
//! store so screen code only deals with drafts and records.
//!
//! The public listing walks an ordered chain of endpoints and ends at
//! built-in sample data; the owner listing retries transient network
//! failures before surfacing them. Writes never fall back silently.

mod auth;
mod client;
mod donaciones;
mod error;
mod mascotas;
mod muestra;
mod personas;
mod solicitudes;
mod sync;

pub use client::{AdoptaFacilClient, TokenFijo, TokenSource};
pub use error::ApiError;
pub use muestra::mascotas_de_muestra;
pub use sync::MascotaSync;
