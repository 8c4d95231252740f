//! In-memory pet store shared by the active screens.
//!
//! Rebuilt from the gateway on every screen mount, never persisted. The
//! identifier is assumed unique but duplicates from a misbehaving backend
//! are kept as-is; `replace`/`remove` therefore touch every matching entry.

use adoptafacil_types::models::Mascota;
use parking_lot::RwLock;

/// Process-lifetime collection of pet records.
#[derive(Default)]
pub struct MascotaStore {
    inner: RwLock<Vec<Mascota>>,
}

impl MascotaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched listing.
    pub fn replace_all(&self, mascotas: Vec<Mascota>) {
        *self.inner.write() = mascotas;
    }

    /// Add a record accepted by the backend.
    pub fn append(&self, mascota: Mascota) {
        self.inner.write().push(mascota);
    }

    /// Overwrite every record with the given id. Returns whether any matched.
    pub fn replace(&self, id: i64, mascota: Mascota) -> bool {
        let mut mascotas = self.inner.write();
        let mut alguna = false;
        for actual in mascotas.iter_mut().filter(|m| m.id == id) {
            *actual = mascota.clone();
            alguna = true;
        }
        alguna
    }

    /// Drop every record with the given id. Returns whether any matched.
    pub fn remove(&self, id: i64) -> bool {
        let mut mascotas = self.inner.write();
        let antes = mascotas.len();
        mascotas.retain(|m| m.id != id);
        mascotas.len() != antes
    }

    pub fn get(&self, id: i64) -> Option<Mascota> {
        self.inner.read().iter().find(|m| m.id == id).cloned()
    }

    pub fn all(&self) -> Vec<Mascota> {
        self.inner.read().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mascota(id: i64, nombre: &str) -> Mascota {
        Mascota {
            id,
            nombre: nombre.to_string(),
            especie: "Perro".to_string(),
            raza: "Criollo".to_string(),
            edad: None,
            fecha_nacimiento: None,
            sexo: None,
            ciudad: None,
            descripcion: None,
            imagen: None,
            imagenes: Vec::new(),
            person: None,
        }
    }

    #[test]
    fn ciclo_completo_de_mutaciones() {
        let store = MascotaStore::new();
        store.replace_all(vec![mascota(1, "Firulais"), mascota(2, "Michi")]);
        assert_eq!(store.len(), 2);

        store.append(mascota(3, "Luna"));
        assert_eq!(store.get(3).unwrap().nombre, "Luna");

        assert!(store.replace(2, mascota(2, "Michi II")));
        assert_eq!(store.get(2).unwrap().nombre, "Michi II");

        assert!(store.remove(1));
        assert!(!store.remove(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn no_deduplica_ids_repetidos() {
        let store = MascotaStore::new();
        store.replace_all(vec![mascota(7, "a"), mascota(7, "b")]);
        assert_eq!(store.len(), 2);

        // replace toca ambas; remove las quita a las dos.
        assert!(store.replace(7, mascota(7, "c")));
        assert!(store.all().iter().all(|m| m.nombre == "c"));
        assert!(store.remove(7));
        assert!(store.is_empty());
    }

    #[test]
    fn replace_de_id_ausente_no_hace_nada() {
        let store = MascotaStore::new();
        store.append(mascota(1, "Firulais"));
        assert!(!store.replace(99, mascota(99, "Nadie")));
        assert_eq!(store.len(), 1);
    }
}
