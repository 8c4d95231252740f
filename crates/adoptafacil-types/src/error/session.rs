//! Session persistence errors.

use thiserror::Error;

/// Errors raised by the device-local session store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// No session data directory could be resolved.
    #[error("No se pudo resolver el directorio de datos")]
    SinDirectorio,

    /// Reading or writing the persisted session failed.
    #[error("Error de almacenamiento de sesión: {mensaje}")]
    Almacenamiento {
        /// Description of the underlying I/O failure
        mensaje: String,
    },

    /// The persisted session could not be parsed.
    #[error("Sesión guardada corrupta: {mensaje}")]
    Corrupta {
        /// Description of the parse failure
        mensaje: String,
    },

    /// An operation required an active session and none exists.
    #[error("No has iniciado sesión")]
    NoAutenticado,
}

impl SessionError {
    pub fn almacenamiento(err: &std::io::Error) -> Self {
        SessionError::Almacenamiento { mensaje: err.to_string() }
    }
}
