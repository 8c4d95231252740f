//! Auth resource: login and registration.

use adoptafacil_types::models::{AuthResponse, LoginRequest, RegisterRequest};

use crate::client::AdoptaFacilClient;
use crate::error::ApiError;

impl AdoptaFacilClient {
    /// Exchange credentials for a token and user profile.
    ///
    /// Anonymous by nature; the caller persists the response through its
    /// session store.
    pub async fn login(&self, credenciales: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let respuesta = self.post("/auth/login").json(credenciales).send().await?;
        Self::leer_json(respuesta).await
    }

    /// Create an account; the backend signs the new user in directly.
    pub async fn register(&self, solicitud: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let respuesta = self.post("/auth/register").json(solicitud).send().await?;
        Self::leer_json(respuesta).await
    }
}
