//! Client-side validation errors for the pet form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Violations detected before a draft is allowed to reach the gateway.
///
/// Validation is all-or-nothing: the first violated rule aborts the submit
/// and no network call is made.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum FormError {
    /// A required field was left empty. The message names the field.
    #[error("El campo '{campo}' es obligatorio")]
    CampoObligatorio {
        /// Field name as shown to the user (nombre, especie, raza, ...)
        campo: String,
    },

    /// The birth date could not be parsed or is out of range.
    #[error("La fecha '{entrada}' no es válida. Use formato YYYY-MM-DD (Ej: 2020-01-15)")]
    FechaInvalida {
        /// Raw input as typed by the user
        entrada: String,
    },

    /// The birth date parsed but no age could be derived (future date).
    #[error("La fecha de nacimiento no es válida o la edad no se pudo calcular")]
    EdadNoCalculada,

    /// A draft needs at least one image before it can be submitted.
    #[error("Debes agregar al menos una imagen")]
    SinImagenes,

    /// The picker was invoked with no free image slots left.
    #[error("Solo puedes seleccionar un máximo de {maximo} imágenes")]
    LimiteImagenes {
        /// Hard cap on images per pet
        maximo: usize,
    },
}

impl FormError {
    pub fn campo_obligatorio(campo: &str) -> Self {
        FormError::CampoObligatorio { campo: campo.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensaje_nombra_el_campo() {
        let err = FormError::campo_obligatorio("ciudad");
        assert!(err.to_string().contains("ciudad"));
    }

    #[test]
    fn serializa_con_etiqueta() {
        let err = FormError::FechaInvalida { entrada: "ayer".to_string() };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("FechaInvalida"));
        assert!(json.contains("ayer"));
        let de: FormError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, de);
    }
}
