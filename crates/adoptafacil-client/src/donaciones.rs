//! Donation resource (`/donaciones`).

use adoptafacil_types::models::Donacion;

use crate::client::AdoptaFacilClient;
use crate::error::ApiError;

impl AdoptaFacilClient {
    pub async fn list_donaciones(&self) -> Result<Vec<Donacion>, ApiError> {
        let peticion = self.con_token(self.get("/donaciones"))?;
        Self::leer_json(peticion.send().await?).await
    }

    pub async fn get_donacion(&self, id: i64) -> Result<Donacion, ApiError> {
        let peticion = self.con_token(self.get(&format!("/donaciones/{id}")))?;
        Self::leer_json(peticion.send().await?).await
    }

    /// Donations made by one user, for the profile screen.
    pub async fn donaciones_por_donante(&self, donante_id: i64) -> Result<Vec<Donacion>, ApiError> {
        let ruta = format!("/donaciones/donante/{donante_id}");
        let peticion = self.con_token(self.get(&ruta))?;
        Self::leer_json(peticion.send().await?).await
    }

    /// Register a donation; the response carries the server id and date.
    pub async fn create_donacion(&self, donacion: &Donacion) -> Result<Donacion, ApiError> {
        let peticion = self.con_token(self.post("/donaciones"))?.json(donacion);
        Self::leer_json(peticion.send().await?).await
    }

    pub async fn delete_donacion(&self, id: i64) -> Result<(), ApiError> {
        let peticion = self.con_token(self.delete(&format!("/donaciones/{id}")))?;
        Self::verificar(peticion.send().await?).await
    }
}
