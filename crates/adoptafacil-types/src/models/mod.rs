//! Domain models for the AdoptaFácil client.
//!
//! Wire shapes mirror the backend DTOs (camelCase field names).

mod auth;
mod donacion;
mod mascota;
mod persona;
mod solicitud;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use donacion::Donacion;
pub use mascota::{ImagenRef, Mascota, MascotaCampos, MascotaImagen, MAX_IMAGENES};
pub use persona::{Persona, Role, RoleType};
pub use solicitud::{EstadoSolicitud, Solicitud};
