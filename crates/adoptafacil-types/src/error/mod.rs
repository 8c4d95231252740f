//! Typed error definitions shared by the core and client crates.
//!
//! Messages are the user-facing Spanish strings surfaced by the app; the
//! variants are what calling code matches on.

mod form;
mod session;

pub use form::FormError;
pub use session::SessionError;
