//! Pet resource: listings with fallback and retry, detail, multipart writes.

use std::time::Duration;

use adoptafacil_types::models::{ImagenRef, Mascota, MascotaCampos, RoleType};
use reqwest::multipart::{Form, Part};

use crate::client::AdoptaFacilClient;
use crate::error::ApiError;
use crate::muestra::mascotas_de_muestra;

/// Retries of the owner listing after the initial attempt.
const REINTENTOS_LISTADO: u32 = 3;
/// Pause between attempts.
const ESPERA_REINTENTO: Duration = Duration::from_millis(1500);

/// The public-listing fallback chain, in the order it is walked.
///
/// A step runs only after the previous one failed, and the token-gated steps
/// only while a token is stored. When the whole chain fails the caller gets
/// [`mascotas_de_muestra`], so the adoption screen always has something to
/// show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FuenteListado {
    /// `/mascotas/publicas`, anonymous.
    Publica,
    /// `/mascotas/admin/all`, token-gated.
    AdminTodas,
    /// `/mascotas`, token-gated.
    General,
}

impl FuenteListado {
    const CADENA: [FuenteListado; 3] =
        [FuenteListado::Publica, FuenteListado::AdminTodas, FuenteListado::General];

    fn ruta(&self) -> &'static str {
        match self {
            FuenteListado::Publica => "/mascotas/publicas",
            FuenteListado::AdminTodas => "/mascotas/admin/all",
            FuenteListado::General => "/mascotas",
        }
    }

    fn requiere_token(&self) -> bool {
        !matches!(self, FuenteListado::Publica)
    }
}

impl AdoptaFacilClient {
    /// Listing for the adoption screen. Infallible: walks the endpoint chain
    /// and ends at the built-in sample data.
    pub async fn list_public(&self) -> Vec<Mascota> {
        for fuente in FuenteListado::CADENA {
            if fuente.requiere_token() && self.token().is_none() {
                continue;
            }
            match self.listar_desde(fuente).await {
                Ok(mascotas) => {
                    tracing::debug!(fuente = ?fuente, total = mascotas.len(), "listado público");
                    return mascotas;
                }
                Err(e) => {
                    tracing::warn!(fuente = ?fuente, error = %e, "fuente de listado falló");
                }
            }
        }
        tracing::warn!("ninguna fuente respondió, usando datos de muestra");
        mascotas_de_muestra()
    }

    async fn listar_desde(&self, fuente: FuenteListado) -> Result<Vec<Mascota>, ApiError> {
        let mut peticion = self.get(fuente.ruta());
        if fuente.requiere_token() {
            peticion = self.con_token(peticion)?;
        }
        Self::leer_json(peticion.send().await?).await
    }

    /// Owner listing for "my pets": `/mascotas/admin/all` for administrators,
    /// the user-scoped `/mascotas` otherwise. A transient failure of the
    /// initial attempt is retried up to [`REINTENTOS_LISTADO`] more times
    /// before the error surfaces.
    pub async fn list_mine(&self, rol: RoleType) -> Result<Vec<Mascota>, ApiError> {
        let fuente = match rol {
            RoleType::Admin => FuenteListado::AdminTodas,
            _ => FuenteListado::General,
        };

        let mut reintentos = 0;
        loop {
            match self.listar_desde(fuente).await {
                Ok(mascotas) => return Ok(mascotas),
                Err(e) if e.es_transitorio() && reintentos < REINTENTOS_LISTADO => {
                    reintentos += 1;
                    tracing::warn!(reintento = reintentos, error = %e, "reintentando listado propio");
                    tokio::time::sleep(ESPERA_REINTENTO).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Detail fetch, with the fields the listings omit.
    pub async fn get_mascota(&self, id: i64) -> Result<Mascota, ApiError> {
        let peticion = self.con_token(self.get(&format!("/mascotas/{id}")))?;
        Self::leer_json(peticion.send().await?).await
    }

    /// Server-side name filter over the user-scoped listing.
    pub async fn search_mascotas(&self, nombre: &str) -> Result<Vec<Mascota>, ApiError> {
        let peticion = self.con_token(self.get("/mascotas"))?.query(&[("nombre", nombre)]);
        Self::leer_json(peticion.send().await?).await
    }

    /// Register a new pet. The response is the canonical record, with
    /// server-assigned id and image URLs.
    pub async fn create_mascota(
        &self,
        campos: &MascotaCampos,
        imagenes: &[ImagenRef],
    ) -> Result<Mascota, ApiError> {
        let formulario = formulario_multiparte(campos, imagenes).await?;
        let peticion = self.con_token(self.post("/mascotas"))?.multipart(formulario);
        Self::leer_json(peticion.send().await?).await
    }

    /// Update an existing pet. Remote images already on the server are not
    /// re-sent; only local ones are attached.
    pub async fn update_mascota(
        &self,
        id: i64,
        campos: &MascotaCampos,
        imagenes: &[ImagenRef],
    ) -> Result<Mascota, ApiError> {
        let formulario = formulario_multiparte(campos, imagenes).await?;
        let peticion =
            self.con_token(self.put(&format!("/mascotas/{id}")))?.multipart(formulario);
        Self::leer_json(peticion.send().await?).await
    }

    pub async fn delete_mascota(&self, id: i64) -> Result<(), ApiError> {
        let peticion = self.con_token(self.delete(&format!("/mascotas/{id}")))?;
        Self::verificar(peticion.send().await?).await
    }

    /// Delete one uploaded image by its server id.
    pub async fn delete_imagen(&self, mascota_id: i64, imagen_id: i64) -> Result<(), ApiError> {
        let ruta = format!("/mascotas/{mascota_id}/imagenes/{imagen_id}");
        let peticion = self.con_token(self.delete(&ruta))?;
        Self::verificar(peticion.send().await?).await
    }
}

/// Build the multipart payload for create/update.
///
/// Field names match the backend DTO; `edad` carries the derived whole
/// years. Only local image references become file parts; an unreadable file
/// is logged and skipped rather than aborting the submit.
async fn formulario_multiparte(
    campos: &MascotaCampos,
    imagenes: &[ImagenRef],
) -> Result<Form, ApiError> {
    let mut formulario = Form::new()
        .text("nombre", campos.nombre.clone())
        .text("especie", campos.especie.clone())
        .text("raza", campos.raza.clone())
        .text("edad", campos.edad_anios.to_string())
        .text("sexo", campos.sexo.clone())
        .text("ciudad", campos.ciudad.clone())
        .text("descripcion", campos.descripcion.clone())
        .text("fechaNacimiento", campos.fecha_nacimiento.format("%Y-%m-%d").to_string());

    for imagen in imagenes {
        let Some(ruta) = imagen.ruta_local() else {
            continue;
        };
        match tokio::fs::read(ruta).await {
            Ok(bytes) => {
                let parte = Part::bytes(bytes)
                    .file_name(imagen.nombre_archivo())
                    .mime_str(&imagen.mime())?;
                formulario = formulario.part("imagenes", parte);
            }
            Err(e) => {
                tracing::warn!(ruta, error = %e, "imagen local ilegible, se omite");
            }
        }
    }

    Ok(formulario)
}
