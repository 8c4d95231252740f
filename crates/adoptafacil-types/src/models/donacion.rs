//! Donation model (`/donaciones` resource).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Donacion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// User who donated.
    pub donante_id: i64,
    pub monto: f64,
    pub metodo_pago: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_donacion: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comentario: Option<String>,
}
