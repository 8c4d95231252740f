//! # AdoptaFácil Core
//!
//! Client-side state for the AdoptaFácil app: the persisted session, the
//! in-memory pet store shared across screens, the pet form coordinator, and
//! supporting configuration, catalog and reporting helpers.
//!
//! ```text
//! adoptafacil-core/src/modules/
//! ├── config.rs    # Base-URL selection (emulator/simulator/device/prod)
//! ├── session.rs   # Token + user persisted across restarts
//! ├── store.rs     # Process-lifetime pet collection
//! ├── form.rs      # Draft, derived age, required-field validation
//! ├── imagenes.rs  # Image-URL rebasing onto the configured host
//! ├── catalogo.rs  # Breeds and cities offered by the form pickers
//! └── reporte.rs   # HTML report of the current listings
//! ```
//!
//! Everything here is synchronous and main-thread-oriented; network I/O
//! lives in `adoptafacil-client`.

pub mod modules;

pub use modules::config::{AppConfig, Entorno};
pub use modules::form::FormularioMascota;
pub use modules::session::{Session, SessionStore};
pub use modules::store::MascotaStore;
