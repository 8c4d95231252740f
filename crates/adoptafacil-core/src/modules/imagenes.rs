//! Image-URL rebasing.
//!
//! The backend historically returned image paths in several shapes: absolute
//! URLs pointing at whatever IP the server thinks it has, `/uploads/...`
//! paths, `uploads/...` without the leading slash, and bare file names.
//! Everything is normalized onto the configured host so images load no
//! matter which network the device is on.

use url::Url;

/// Build a loadable URL for an image reference.
///
/// `base_raiz` is the host root (no `/api` suffix), see
/// [`crate::modules::config::AppConfig::base_raiz`]. Placeholder URLs pass
/// through untouched.
pub fn construir_url_imagen(base_raiz: &str, ruta: &str) -> String {
    let base = base_raiz.trim_end_matches('/');

    if ruta.contains("placeholder") {
        return ruta.to_string();
    }

    // Absolute URL: keep the path, swap in the configured host.
    if ruta.starts_with("http://") || ruta.starts_with("https://") {
        return match Url::parse(ruta) {
            Ok(url) => format!("{base}{}", url.path()),
            Err(_) => ruta.to_string(),
        };
    }

    if ruta.starts_with("/uploads/") {
        return format!("{base}{ruta}");
    }
    if ruta.starts_with("uploads/") {
        return format!("{base}/{ruta}");
    }

    // Bare file name: assume it lives under /uploads.
    if !ruta.starts_with('/') && !ruta.contains('/') {
        return format!("{base}/uploads/{ruta}");
    }

    if ruta.starts_with('/') {
        format!("{base}{ruta}")
    } else {
        format!("{base}/{ruta}")
    }
}
