//! Persisted session: bearer token plus the signed-in user.
//!
//! The token and user survive app restarts in a single JSON file under the
//! platform data directory, written atomically (tmp + rename). An in-memory
//! mirror behind an `RwLock` serves the rest of the app for the lifetime of
//! the process. A missing or corrupt file degrades to "not authenticated".

use std::fs;
use std::path::{Path, PathBuf};

use adoptafacil_types::error::SessionError;
use adoptafacil_types::models::Persona;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Fixed storage keys, kept from the mobile app's key-value store.
pub const CLAVE_TOKEN: &str = "@adoptafacil_token";
pub const CLAVE_USUARIO: &str = "@adoptafacil_user";

const ARCHIVO_SESION: &str = "session.json";

/// An active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Persona,
}

/// On-disk shape: the two fixed keys of the device key-value store.
#[derive(Serialize, Deserialize)]
struct SessionDisco {
    #[serde(rename = "@adoptafacil_token")]
    token: String,
    #[serde(rename = "@adoptafacil_user")]
    user: Persona,
}

/// Device-local session storage with an in-memory mirror.
pub struct SessionStore {
    ruta: PathBuf,
    actual: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Store rooted at the platform data directory.
    pub fn abrir() -> Result<Self, SessionError> {
        let dir = dirs::data_dir().ok_or(SessionError::SinDirectorio)?.join("adoptafacil");
        fs::create_dir_all(&dir).map_err(|e| SessionError::almacenamiento(&e))?;
        Ok(Self::en_directorio(&dir))
    }

    /// Store rooted at an explicit directory (tests, alternate profiles).
    pub fn en_directorio(dir: &Path) -> Self {
        Self { ruta: dir.join(ARCHIVO_SESION), actual: RwLock::new(None) }
    }

    /// Restore the persisted session into memory, if one exists.
    ///
    /// Corrupt data is logged and treated as signed-out rather than
    /// propagated: the user can always log in again.
    pub fn restaurar(&self) -> Result<Option<Session>, SessionError> {
        match self.leer_disco() {
            Ok(sesion) => {
                *self.actual.write() = sesion.clone();
                Ok(sesion)
            }
            Err(SessionError::Corrupta { mensaje }) => {
                tracing::warn!("Sesión guardada corrupta, se descarta: {}", mensaje);
                let _ = fs::remove_file(&self.ruta);
                *self.actual.write() = None;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn leer_disco(&self) -> Result<Option<Session>, SessionError> {
        let contenido = match fs::read_to_string(&self.ruta) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::almacenamiento(&e)),
        };
        let disco: SessionDisco = serde_json::from_str(&contenido)
            .map_err(|e| SessionError::Corrupta { mensaje: e.to_string() })?;
        Ok(Some(Session { token: disco.token, user: disco.user }))
    }

    /// Persist and activate a session after a successful login.
    pub fn sign_in(&self, token: String, user: Persona) -> Result<(), SessionError> {
        let disco = SessionDisco { token: token.clone(), user: user.clone() };
        let contenido = serde_json::to_string_pretty(&disco)
            .map_err(|e| SessionError::Corrupta { mensaje: e.to_string() })?;

        let temporal = self.ruta.with_extension("json.tmp");
        if let Err(e) = fs::write(&temporal, contenido) {
            let _ = fs::remove_file(&temporal);
            return Err(SessionError::almacenamiento(&e));
        }
        fs::rename(&temporal, &self.ruta).map_err(|e| {
            let _ = fs::remove_file(&temporal);
            SessionError::almacenamiento(&e)
        })?;

        *self.actual.write() = Some(Session { token, user });
        Ok(())
    }

    /// Drop the persisted session and the in-memory mirror.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.ruta) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(SessionError::almacenamiento(&e)),
        }
        *self.actual.write() = None;
        Ok(())
    }

    pub fn current(&self) -> Option<Session> {
        self.actual.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.actual.read().as_ref().map(|s| s.token.clone())
    }

    pub fn usuario(&self) -> Option<Persona> {
        self.actual.read().as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.actual.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adoptafacil_types::models::{Role, RoleType};

    fn usuario() -> Persona {
        Persona {
            id_person: Some(1),
            name: "Ana".into(),
            last_name: "Gómez".into(),
            email: "ana@example.com".into(),
            role: Some(Role { id_role: None, role_type: RoleType::Aliado }),
        }
    }

    #[test]
    fn sesion_sobrevive_un_reinicio() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::en_directorio(dir.path());
        store.sign_in("tok-123".into(), usuario()).unwrap();
        assert!(store.is_authenticated());

        // "Reinicio": un store nuevo sobre el mismo directorio.
        let reiniciado = SessionStore::en_directorio(dir.path());
        assert!(!reiniciado.is_authenticated());
        let sesion = reiniciado.restaurar().unwrap().unwrap();
        assert_eq!(sesion.token, "tok-123");
        assert_eq!(sesion.user.email, "ana@example.com");
        assert_eq!(reiniciado.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn sign_out_borra_el_archivo() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::en_directorio(dir.path());
        store.sign_in("tok".into(), usuario()).unwrap();
        store.sign_out().unwrap();
        assert!(!store.is_authenticated());

        let reiniciado = SessionStore::en_directorio(dir.path());
        assert_eq!(reiniciado.restaurar().unwrap(), None);
    }

    #[test]
    fn archivo_corrupto_degrada_a_no_autenticado() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ARCHIVO_SESION), "{esto no es json").unwrap();
        let store = SessionStore::en_directorio(dir.path());
        assert_eq!(store.restaurar().unwrap(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn guarda_bajo_las_claves_fijas() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::en_directorio(dir.path());
        store.sign_in("tok".into(), usuario()).unwrap();
        let contenido = std::fs::read_to_string(dir.path().join(ARCHIVO_SESION)).unwrap();
        assert!(contenido.contains(CLAVE_TOKEN));
        assert!(contenido.contains(CLAVE_USUARIO));
    }

    #[test]
    fn sign_out_sin_sesion_no_falla() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::en_directorio(dir.path());
        store.sign_out().unwrap();
    }
}
