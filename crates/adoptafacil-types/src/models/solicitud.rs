//! Adoption request model (`/solicitudes` resource).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Mascota, Persona};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solicitud {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solicitante: Option<Persona>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mascota: Option<Mascota>,
    pub estado: EstadoSolicitud,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comentario: Option<String>,
}

/// Lifecycle states of an adoption request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EstadoSolicitud {
    #[serde(rename = "PENDIENTE")]
    Pendiente,
    #[serde(rename = "APROBADA")]
    Aprobada,
    #[serde(rename = "RECHAZADA")]
    Rechazada,
}

impl fmt::Display for EstadoSolicitud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EstadoSolicitud::Pendiente => "PENDIENTE",
            EstadoSolicitud::Aprobada => "APROBADA",
            EstadoSolicitud::Rechazada => "RECHAZADA",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_viaja_en_mayusculas() {
        assert_eq!(serde_json::to_string(&EstadoSolicitud::Aprobada).unwrap(), "\"APROBADA\"");
        assert_eq!(EstadoSolicitud::Pendiente.to_string(), "PENDIENTE");
    }
}
