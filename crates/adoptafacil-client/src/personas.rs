//! Person resource (`/persons`), used by the profile and admin screens.

use adoptafacil_types::models::{Persona, RoleType};

use crate::client::AdoptaFacilClient;
use crate::error::ApiError;

impl AdoptaFacilClient {
    /// Admin-only listing of every registered user.
    pub async fn list_personas(&self) -> Result<Vec<Persona>, ApiError> {
        let peticion = self.con_token(self.get("/persons"))?;
        Self::leer_json(peticion.send().await?).await
    }

    pub async fn get_persona(&self, id: i64) -> Result<Persona, ApiError> {
        let peticion = self.con_token(self.get(&format!("/persons/{id}")))?;
        Self::leer_json(peticion.send().await?).await
    }

    pub async fn get_persona_por_email(&self, email: &str) -> Result<Persona, ApiError> {
        let peticion = self.con_token(self.get(&format!("/persons/email/{email}")))?;
        Self::leer_json(peticion.send().await?).await
    }

    /// Everyone holding a given role, e.g. the partner directory.
    pub async fn get_personas_por_rol(&self, rol: RoleType) -> Result<Vec<Persona>, ApiError> {
        let peticion = self.con_token(self.get(&format!("/persons/role/{}", rol.as_str())))?;
        Self::leer_json(peticion.send().await?).await
    }

    /// Admin creation path; self-service signup goes through `register`.
    pub async fn create_persona(&self, persona: &Persona) -> Result<Persona, ApiError> {
        let peticion = self.con_token(self.post("/persons"))?.json(persona);
        Self::leer_json(peticion.send().await?).await
    }

    /// Update a profile; the response is the canonical record.
    pub async fn update_persona(&self, id: i64, persona: &Persona) -> Result<Persona, ApiError> {
        let peticion = self.con_token(self.put(&format!("/persons/{id}")))?.json(persona);
        Self::leer_json(peticion.send().await?).await
    }

    pub async fn delete_persona(&self, id: i64) -> Result<(), ApiError> {
        let peticion = self.con_token(self.delete(&format!("/persons/{id}")))?;
        Self::verificar(peticion.send().await?).await
    }
}
