//! API endpoint configuration.
//!
//! The backend address depends on where the app runs: Android emulators
//! reach the host through `10.0.2.2`, simulators and web builds use
//! `localhost`, physical devices need the host's LAN IP. The selection is
//! compiled in; `ADOPTAFACIL_API_URL` overrides everything at runtime.

use std::time::Duration;

/// Single per-request timeout for every gateway call.
pub const API_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the app is running, which decides how to reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entorno {
    /// Android emulator: 10.0.2.2 forwards to the host machine.
    AndroidEmulator,
    /// iOS simulator shares the host loopback.
    IosSimulator,
    /// Web build served from the host.
    Web,
    /// Physical device on the same Wi-Fi network as the host.
    DispositivoFisico,
    Produccion,
}

impl Entorno {
    pub fn base_url(&self) -> &'static str {
        match self {
            Entorno::AndroidEmulator => "http://10.0.2.2:8080/api",
            Entorno::IosSimulator | Entorno::Web => "http://localhost:8080/api",
            Entorno::DispositivoFisico => "http://192.168.0.12:8080/api",
            Entorno::Produccion => "https://api.adoptafacil.com/api",
        }
    }
}

/// Resolved API configuration handed to the gateway client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn para_entorno(entorno: Entorno) -> Self {
        Self { base_url: entorno.base_url().to_string(), timeout: API_TIMEOUT }
    }

    /// Compiled-in default, overridable via `ADOPTAFACIL_API_URL`.
    pub fn desde_entorno_o_env(entorno: Entorno) -> Self {
        let mut config = Self::para_entorno(entorno);
        if let Ok(url) = std::env::var("ADOPTAFACIL_API_URL") {
            if !url.trim().is_empty() {
                config.base_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        config
    }

    /// Host root without the `/api` prefix, where `/uploads/*` is served.
    pub fn base_raiz(&self) -> String {
        let sin_barra = self.base_url.trim_end_matches('/');
        sin_barra.strip_suffix("/api").unwrap_or(sin_barra).to_string()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::para_entorno(Entorno::Produccion)
    }
}
