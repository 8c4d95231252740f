//! # AdoptaFácil Types
//!
//! Wire models, domain errors and date handling for the AdoptaFácil client.
//!
//! This crate sits at the bottom of the dependency graph:
//!
//! ```text
//!            adoptafacil-types (this crate)
//!                     │
//!            ┌────────┴────────┐
//!            ▼                 ▼
//!     adoptafacil-core  adoptafacil-client
//! ```
//!
//! - **`models`** - Domain models (Mascota, Persona, Donacion, Solicitud, auth DTOs)
//! - **`error`** - Typed form and session errors
//! - **`fecha`** - Birth-date parsing and age derivation
//!
//! Field names on the wire follow the Spring backend DTOs (camelCase:
//! `fechaNacimiento`, `imagenPath`, `idPerson`, ...). All types are `Clone`
//! and serde-serializable.

pub mod error;
pub mod fecha;
pub mod models;

pub use error::{FormError, SessionError};
pub use fecha::{calcular_edad, formatear_fecha, Edad};
pub use models::{
    AuthResponse, Donacion, EstadoSolicitud, ImagenRef, LoginRequest, Mascota, MascotaCampos,
    MascotaImagen, Persona, RegisterRequest, Role, RoleType, Solicitud,
};
