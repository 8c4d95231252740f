//! Gateway ↔ local store synchronization.
//!
//! Screens go through [`MascotaSync`] so the shared collection only ever
//! reflects what the backend confirmed: listings replace it wholesale,
//! writes touch it after the remote call succeeded, never before.

use std::sync::Arc;

use adoptafacil_core::{FormularioMascota, MascotaStore};
use adoptafacil_types::models::{Mascota, RoleType};

use crate::client::AdoptaFacilClient;
use crate::error::ApiError;

pub struct MascotaSync {
    client: AdoptaFacilClient,
    store: Arc<MascotaStore>,
}

impl MascotaSync {
    pub fn new(client: AdoptaFacilClient, store: Arc<MascotaStore>) -> Self {
        Self { client, store }
    }

    pub fn client(&self) -> &AdoptaFacilClient {
        &self.client
    }

    pub fn store(&self) -> &MascotaStore {
        &self.store
    }

    /// Rebuild the store for the adoption screen. Never fails: the fallback
    /// chain ends at sample data.
    pub async fn refresh_public(&self) -> usize {
        let mascotas = self.client.list_public().await;
        let total = mascotas.len();
        self.store.replace_all(mascotas);
        total
    }

    /// Rebuild the store for the "my pets" screen.
    pub async fn refresh_mine(&self, rol: RoleType) -> Result<usize, ApiError> {
        let mascotas = self.client.list_mine(rol).await?;
        let total = mascotas.len();
        self.store.replace_all(mascotas);
        Ok(total)
    }

    /// Validate and submit a new pet, then append the canonical record.
    pub async fn create(&self, form: &FormularioMascota) -> Result<Mascota, ApiError> {
        let campos = form.validar()?;
        let mascota = self.client.create_mascota(&campos, form.imagenes()).await?;
        self.store.append(mascota.clone());
        Ok(mascota)
    }

    /// Validate and submit an update, then swap the record in place.
    pub async fn update(&self, id: i64, form: &FormularioMascota) -> Result<Mascota, ApiError> {
        let campos = form.validar()?;
        let mascota = self.client.update_mascota(id, &campos, form.imagenes()).await?;
        self.store.replace(id, mascota.clone());
        Ok(mascota)
    }

    /// Delete remotely, then drop from the store. A failed remote delete
    /// leaves the store untouched.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_mascota(id).await?;
        self.store.remove(id);
        Ok(())
    }

    /// Remove the image at `indice` from the draft, fail-closed: a
    /// server-backed image must be deleted remotely first, and the draft is
    /// left unchanged if that call fails. Local-only images are dropped
    /// without any network call.
    pub async fn delete_imagen(
        &self,
        form: &mut FormularioMascota,
        indice: usize,
    ) -> Result<(), ApiError> {
        if let (Some(mascota_id), Some(imagen_id)) = (form.en_edicion(), form.id_imagen(indice)) {
            self.client.delete_imagen(mascota_id, imagen_id).await?;
        }
        form.quitar_imagen(indice);
        Ok(())
    }
}
