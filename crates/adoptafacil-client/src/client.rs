//! HTTP client shared by every gateway resource.

use std::sync::Arc;

use adoptafacil_core::modules::imagenes::construir_url_imagen;
use adoptafacil_core::{AppConfig, SessionStore};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Where the bearer token comes from.
///
/// The app wires in its [`SessionStore`]; tests and scripts can use
/// [`TokenFijo`]. Returning `None` means "not signed in", which token-gated
/// operations turn into [`ApiError::SinToken`] without a network call.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        SessionStore::token(self)
    }
}

/// A constant token, for tests and one-off scripts.
pub struct TokenFijo(pub String);

impl TokenSource for TokenFijo {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Gateway to the AdoptaFácil backend.
///
/// One instance per process; `reqwest::Client` pools connections internally
/// and the per-request timeout comes from the [`AppConfig`].
pub struct AdoptaFacilClient {
    http: Client,
    config: AppConfig,
    tokens: Arc<dyn TokenSource>,
}

impl AdoptaFacilClient {
    pub fn new(config: AppConfig, tokens: Arc<dyn TokenSource>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config, tokens })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Absolute URL of a stored image path, for display.
    pub fn url_imagen(&self, ruta: &str) -> String {
        construir_url_imagen(&self.config.base_raiz(), ruta)
    }

    pub(crate) fn url(&self, ruta: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), ruta)
    }

    pub(crate) fn get(&self, ruta: &str) -> RequestBuilder {
        self.http.get(self.url(ruta))
    }

    pub(crate) fn post(&self, ruta: &str) -> RequestBuilder {
        self.http.post(self.url(ruta))
    }

    pub(crate) fn put(&self, ruta: &str) -> RequestBuilder {
        self.http.put(self.url(ruta))
    }

    pub(crate) fn delete(&self, ruta: &str) -> RequestBuilder {
        self.http.delete(self.url(ruta))
    }

    pub(crate) fn token(&self) -> Option<String> {
        self.tokens.token()
    }

    /// Token for an operation that cannot run anonymously.
    pub(crate) fn requiere_token(&self) -> Result<String, ApiError> {
        self.token().ok_or(ApiError::SinToken)
    }

    /// Attach the bearer token, failing fast when none is stored.
    pub(crate) fn con_token(&self, peticion: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(peticion.bearer_auth(self.requiere_token()?))
    }

    /// Decode a JSON body after mapping non-success statuses.
    pub(crate) async fn leer_json<T>(respuesta: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let respuesta = Self::verificar_estado(respuesta).await?;
        Ok(respuesta.json().await?)
    }

    /// Status check for operations whose body we discard.
    pub(crate) async fn verificar(respuesta: Response) -> Result<(), ApiError> {
        Self::verificar_estado(respuesta).await.map(|_| ())
    }

    async fn verificar_estado(respuesta: Response) -> Result<Response, ApiError> {
        let status = respuesta.status();
        if status.is_success() {
            return Ok(respuesta);
        }
        let cuerpo = respuesta.text().await.unwrap_or_default();
        Err(ApiError::desde_status(status.as_u16(), cuerpo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adoptafacil_core::Entorno;

    fn cliente() -> AdoptaFacilClient {
        AdoptaFacilClient::new(
            AppConfig::para_entorno(Entorno::AndroidEmulator),
            Arc::new(TokenFijo("tok".into())),
        )
        .unwrap()
    }

    #[test]
    fn compone_urls_sobre_la_base() {
        let cliente = cliente();
        assert_eq!(cliente.url("/mascotas/publicas"), "http://10.0.2.2:8080/api/mascotas/publicas");
    }

    #[test]
    fn las_imagenes_cuelgan_de_la_raiz_sin_api() {
        let cliente = cliente();
        assert_eq!(
            cliente.url_imagen("/uploads/firulais.jpg"),
            "http://10.0.2.2:8080/uploads/firulais.jpg"
        );
    }

    #[test]
    fn sin_token_falla_antes_de_la_red() {
        struct Anonimo;
        impl TokenSource for Anonimo {
            fn token(&self) -> Option<String> {
                None
            }
        }
        let cliente = AdoptaFacilClient::new(
            AppConfig::para_entorno(Entorno::Web),
            Arc::new(Anonimo),
        )
        .unwrap();
        assert!(matches!(cliente.requiere_token(), Err(ApiError::SinToken)));
    }
}
