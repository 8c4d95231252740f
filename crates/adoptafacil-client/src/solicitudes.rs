//! Adoption-request resource (`/solicitudes`).

use adoptafacil_types::models::{EstadoSolicitud, Solicitud};

use crate::client::AdoptaFacilClient;
use crate::error::ApiError;

impl AdoptaFacilClient {
    /// Requests visible to the current user: all of them for administrators,
    /// the user's own otherwise. The backend decides from the token.
    pub async fn list_solicitudes(&self) -> Result<Vec<Solicitud>, ApiError> {
        let peticion = self.con_token(self.get("/solicitudes"))?;
        Self::leer_json(peticion.send().await?).await
    }

    /// File an adoption request for a pet. New requests start PENDIENTE.
    pub async fn create_solicitud(&self, solicitud: &Solicitud) -> Result<Solicitud, ApiError> {
        let peticion = self.con_token(self.post("/solicitudes"))?.json(solicitud);
        Self::leer_json(peticion.send().await?).await
    }

    /// Approve or reject a request (owner/admin action). The backend takes
    /// the new state and optional comment as query parameters.
    pub async fn update_estado_solicitud(
        &self,
        id: i64,
        estado: EstadoSolicitud,
        comentario: Option<&str>,
    ) -> Result<Solicitud, ApiError> {
        let ruta = format!("/solicitudes/{id}/estado");
        let mut peticion =
            self.con_token(self.put(&ruta))?.query(&[("estado", estado.to_string())]);
        if let Some(comentario) = comentario {
            peticion = peticion.query(&[("comentario", comentario)]);
        }
        Self::leer_json(peticion.send().await?).await
    }
}
