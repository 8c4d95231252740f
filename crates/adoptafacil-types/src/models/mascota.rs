//! Pet record and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Persona;

/// Hard cap on images per pet, enforced client-side and by the backend.
pub const MAX_IMAGENES: usize = 3;

/// A pet record as served by the `/mascotas` resource.
///
/// Summary listings omit `sexo`, `ciudad` and `descripcion`; the detail
/// endpoint fills them in. `person` is attached only by the administrative
/// listing. The canonical age unit is `fecha_nacimiento`; `edad` is
/// server-assigned metadata (whole years) kept for display fallback only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mascota {
    pub id: i64,
    pub nombre: String,
    pub especie: String,
    pub raza: String,
    /// Whole years as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edad: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciudad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    /// Legacy single-image field still emitted by older backend revisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imagenes: Vec<MascotaImagen>,
    /// Owner info, present only on the admin-wide listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Persona>,
}

/// A server-side image attached to a pet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MascotaImagen {
    /// Server-assigned identifier, required for individual deletion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub imagen_path: String,
}

/// An image reference held by a form draft.
///
/// Classified once, when the reference enters the draft (picker selection or
/// edit-mode prefill). Remote references already live on the server and are
/// never re-uploaded; local references are attached to the next multipart
/// submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagenRef {
    /// Already uploaded; the URL points at the backend.
    Remota(String),
    /// Picked from the device; a `file://`/`content://` URI or plain path.
    Local(String),
}

impl ImagenRef {
    /// Classify a picker or server URI.
    pub fn desde_uri(uri: &str) -> Self {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            ImagenRef::Remota(uri.to_string())
        } else {
            ImagenRef::Local(uri.to_string())
        }
    }

    pub fn es_remota(&self) -> bool {
        matches!(self, ImagenRef::Remota(_))
    }

    /// URI as displayed in the draft's image list.
    pub fn uri(&self) -> &str {
        match self {
            ImagenRef::Remota(url) => url,
            ImagenRef::Local(ruta) => ruta,
        }
    }

    /// Filesystem path for a local reference (`file://` prefix stripped).
    pub fn ruta_local(&self) -> Option<&str> {
        match self {
            ImagenRef::Remota(_) => None,
            ImagenRef::Local(ruta) => Some(ruta.strip_prefix("file://").unwrap_or(ruta)),
        }
    }

    /// File name used for the multipart part.
    pub fn nombre_archivo(&self) -> String {
        self.uri()
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("imagen.jpg")
            .to_string()
    }

    /// MIME type guessed from the file extension; JPEG when unknown.
    pub fn mime(&self) -> String {
        match self.nombre_archivo().rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
                format!("image/{}", ext.to_ascii_lowercase())
            }
            _ => "image/jpeg".to_string(),
        }
    }
}

/// A validated pet payload, produced by the form coordinator.
///
/// `edad_anios` is derived from `fecha_nacimiento` at validation time and is
/// what the backend's integer `edad` field receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MascotaCampos {
    pub nombre: String,
    pub especie: String,
    pub raza: String,
    pub fecha_nacimiento: NaiveDate,
    pub edad_anios: u32,
    pub sexo: String,
    pub ciudad: String,
    pub descripcion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_dto_del_backend() {
        let json = r#"{
            "id": 7,
            "nombre": "Firulais",
            "especie": "Perro",
            "raza": "Labrador",
            "edad": 4,
            "fechaNacimiento": "2020-01-15",
            "sexo": "Macho",
            "ciudad": "Bogotá",
            "descripcion": "Muy juguetón",
            "imagenes": [{"id": 12, "imagenPath": "/uploads/firulais.jpg"}]
        }"#;
        let m: Mascota = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, 7);
        assert_eq!(m.edad, Some(4));
        assert_eq!(m.fecha_nacimiento.unwrap().to_string(), "2020-01-15");
        assert_eq!(m.imagenes[0].id, Some(12));
        assert_eq!(m.imagenes[0].imagen_path, "/uploads/firulais.jpg");
        assert!(m.person.is_none());
    }

    #[test]
    fn tolera_listado_resumido() {
        // Los listados resumidos omiten ciudad, descripción e imágenes.
        let json = r#"{"id": 1, "nombre": "Michi", "especie": "Gato", "raza": "Siamés"}"#;
        let m: Mascota = serde_json::from_str(json).unwrap();
        assert!(m.ciudad.is_none());
        assert!(m.imagenes.is_empty());
    }

    #[test]
    fn clasifica_uris_una_sola_vez() {
        assert!(ImagenRef::desde_uri("https://x.com/a.png").es_remota());
        assert!(ImagenRef::desde_uri("http://10.0.2.2:8080/uploads/a.jpg").es_remota());
        assert!(!ImagenRef::desde_uri("file:///tmp/foto.jpg").es_remota());
        assert!(!ImagenRef::desde_uri("content://media/external/images/9").es_remota());
        assert!(!ImagenRef::desde_uri("/tmp/foto.jpg").es_remota());
    }

    #[test]
    fn ruta_local_quita_el_esquema_file() {
        let img = ImagenRef::desde_uri("file:///tmp/foto.jpg");
        assert_eq!(img.ruta_local(), Some("/tmp/foto.jpg"));
        assert_eq!(ImagenRef::desde_uri("https://x.com/a.png").ruta_local(), None);
    }

    #[test]
    fn nombre_y_mime_desde_la_extension() {
        let img = ImagenRef::desde_uri("file:///fotos/perro.PNG");
        assert_eq!(img.nombre_archivo(), "perro.PNG");
        assert_eq!(img.mime(), "image/png");

        let sin_extension = ImagenRef::desde_uri("content://media/external/9");
        assert_eq!(sin_extension.mime(), "image/jpeg");
    }
}
