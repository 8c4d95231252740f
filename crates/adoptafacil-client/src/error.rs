//! Error taxonomy for the AdoptaFácil gateway.

use adoptafacil_types::error::FormError;
use thiserror::Error;

/// Errors surfaced by gateway operations.
///
/// Messages are the Spanish strings the screens show. The policy helpers
/// encode how the app reacts: [`es_transitorio`](ApiError::es_transitorio)
/// failures are retried on read operations,
/// [`requiere_reautenticacion`](ApiError::requiere_reautenticacion) failures
/// prompt a new login instead of a retry.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 401: the stored token is no longer accepted.
    #[error("Sesión expirada. Inicia sesión nuevamente")]
    SesionExpirada,

    /// 403: authenticated but the role does not allow this.
    #[error("No tienes permisos para acceder a esta sección")]
    AccesoDenegado,

    /// 404.
    #[error("El recurso solicitado no existe")]
    NoEncontrado,

    /// The per-request timeout elapsed.
    #[error("Tiempo de espera agotado. Verifica tu conexión")]
    Tiempo,

    /// No response at all: unreachable host, refused connection, truncated body.
    #[error("No se pudo conectar con el servidor. Verifica que el backend esté corriendo")]
    SinConexion,

    /// Any other HTTP status.
    #[error("Error del servidor ({status}): {mensaje}")]
    Servidor {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it was readable.
        mensaje: String,
    },

    /// The server answered but the payload was not what we expect.
    #[error("Respuesta inválida del servidor: {0}")]
    RespuestaInvalida(String),

    /// The operation needs a session and none is stored.
    #[error("No has iniciado sesión")]
    SinToken,

    /// Client-side validation stopped the submit before any network call.
    #[error(transparent)]
    Formulario(#[from] FormError),
}

impl ApiError {
    /// Map a non-success HTTP status to its variant.
    pub(crate) fn desde_status(status: u16, cuerpo: String) -> Self {
        match status {
            401 => ApiError::SesionExpirada,
            403 => ApiError::AccesoDenegado,
            404 => ApiError::NoEncontrado,
            _ => ApiError::Servidor { status, mensaje: cuerpo },
        }
    }

    /// Worth an automatic retry: the request may simply not have arrived.
    pub fn es_transitorio(&self) -> bool {
        matches!(self, ApiError::Tiempo | ApiError::SinConexion)
    }

    /// The user must log in again; retrying with the same token is pointless.
    pub fn requiere_reautenticacion(&self) -> bool {
        matches!(self, ApiError::SesionExpirada | ApiError::AccesoDenegado)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Tiempo
        } else if err.is_decode() {
            ApiError::RespuestaInvalida(err.to_string())
        } else {
            // connect errors, dropped connections, truncated bodies
            ApiError::SinConexion
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estados_http_conocidos() {
        assert!(matches!(ApiError::desde_status(401, String::new()), ApiError::SesionExpirada));
        assert!(matches!(ApiError::desde_status(403, String::new()), ApiError::AccesoDenegado));
        assert!(matches!(ApiError::desde_status(404, String::new()), ApiError::NoEncontrado));
        assert!(matches!(
            ApiError::desde_status(500, "boom".into()),
            ApiError::Servidor { status: 500, .. }
        ));
    }

    #[test]
    fn politica_de_reintento_y_reautenticacion() {
        assert!(ApiError::Tiempo.es_transitorio());
        assert!(ApiError::SinConexion.es_transitorio());
        assert!(!ApiError::SesionExpirada.es_transitorio());
        assert!(ApiError::SesionExpirada.requiere_reautenticacion());
        assert!(ApiError::AccesoDenegado.requiere_reautenticacion());
        assert!(!ApiError::NoEncontrado.requiere_reautenticacion());
    }

    #[test]
    fn error_de_formulario_conserva_su_mensaje() {
        let err: ApiError = FormError::campo_obligatorio("ciudad").into();
        assert!(err.to_string().contains("ciudad"));
    }
}
