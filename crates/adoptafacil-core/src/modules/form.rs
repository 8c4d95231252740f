//! Pet form coordinator.
//!
//! One screen's editable draft of a pet record, from blank (create mode) or
//! pre-filled from the detail endpoint (edit mode) to a validated payload
//! the gateway will accept. Age is derived from the birth date on every
//! change; required-field validation runs before any network call and the
//! first violated rule aborts the submit.

use std::collections::HashMap;

use adoptafacil_types::error::FormError;
use adoptafacil_types::fecha::{calcular_edad, formatear_fecha, Edad};
use adoptafacil_types::models::{ImagenRef, Mascota, MascotaCampos, MAX_IMAGENES};
use chrono::{Local, NaiveDate};

use super::imagenes::construir_url_imagen;

/// Editable draft of a pet record.
#[derive(Debug, Clone, Default)]
pub struct FormularioMascota {
    pub nombre: String,
    pub especie: String,
    pub raza: String,
    /// Raw birth-date input exactly as typed.
    fecha_nacimiento: String,
    /// Derived from the birth date; `None` until a date is entered.
    edad: Option<Edad>,
    pub sexo: String,
    pub ciudad: String,
    pub descripcion: String,
    imagenes: Vec<ImagenRef>,
    /// Remote URL → server image id, for individual deletion in edit mode.
    ids_imagen: HashMap<String, i64>,
    /// Id of the record being edited; `None` in create mode.
    editando: Option<i64>,
}

impl FormularioMascota {
    /// Blank draft (create mode) with the screen defaults.
    pub fn new() -> Self {
        Self {
            especie: "Perro".to_string(),
            sexo: "Macho".to_string(),
            ..Self::default()
        }
    }

    /// Draft pre-filled from a detail fetch (edit mode).
    ///
    /// `base_raiz` rebases stored image paths so the URL→id map keys match
    /// what the screen displays. At most [`MAX_IMAGENES`] images are kept.
    pub fn desde_mascota(detalle: &Mascota, base_raiz: &str) -> Self {
        let mut form = Self {
            nombre: detalle.nombre.clone(),
            especie: detalle.especie.clone(),
            raza: detalle.raza.clone(),
            sexo: detalle.sexo.clone().unwrap_or_else(|| "Macho".to_string()),
            ciudad: detalle.ciudad.clone().unwrap_or_default(),
            descripcion: detalle.descripcion.clone().unwrap_or_default(),
            editando: Some(detalle.id),
            ..Self::default()
        };

        for imagen in detalle.imagenes.iter().take(MAX_IMAGENES) {
            let url = construir_url_imagen(base_raiz, &imagen.imagen_path);
            if let Some(id) = imagen.id {
                form.ids_imagen.insert(url.clone(), id);
            }
            form.imagenes.push(ImagenRef::Remota(url));
        }

        if let Some(fecha) = detalle.fecha_nacimiento {
            form.set_fecha_nacimiento(&fecha.format("%Y-%m-%d").to_string());
        }
        form
    }

    pub fn en_edicion(&self) -> Option<i64> {
        self.editando
    }

    /// Update the birth date and re-derive the age against today.
    pub fn set_fecha_nacimiento(&mut self, entrada: &str) {
        self.set_fecha_nacimiento_con(entrada, Local::now().date_naive());
    }

    /// Same as [`set_fecha_nacimiento`](Self::set_fecha_nacimiento) with an
    /// explicit reference date.
    pub fn set_fecha_nacimiento_con(&mut self, entrada: &str, hoy: NaiveDate) {
        self.fecha_nacimiento = entrada.to_string();
        self.edad = formatear_fecha(entrada).map(|nacimiento| calcular_edad(nacimiento, hoy));
    }

    pub fn fecha_nacimiento(&self) -> &str {
        &self.fecha_nacimiento
    }

    /// Derived age for display ("4 años", "Fecha inválida", ...).
    pub fn edad_texto(&self) -> Option<String> {
        self.edad.map(|e| e.to_string())
    }

    /// Free image slots; the picker's selection limit.
    pub fn espacios_disponibles(&self) -> usize {
        MAX_IMAGENES.saturating_sub(self.imagenes.len())
    }

    /// Append picker results, truncating at [`MAX_IMAGENES`].
    ///
    /// Returns how many were actually kept. Rejects the attempt outright
    /// when no slot is free, so the screen can show the limit message.
    pub fn agregar_imagenes<I>(&mut self, uris: I) -> Result<usize, FormError>
    where
        I: IntoIterator<Item = String>,
    {
        if self.espacios_disponibles() == 0 {
            return Err(FormError::LimiteImagenes { maximo: MAX_IMAGENES });
        }
        let mut agregadas = 0;
        for uri in uris {
            if self.imagenes.len() >= MAX_IMAGENES {
                break;
            }
            self.imagenes.push(ImagenRef::desde_uri(&uri));
            agregadas += 1;
        }
        Ok(agregadas)
    }

    pub fn imagenes(&self) -> &[ImagenRef] {
        &self.imagenes
    }

    /// Server id of the image at `indice`, when it exists remotely.
    pub fn id_imagen(&self, indice: usize) -> Option<i64> {
        match self.imagenes.get(indice)? {
            ImagenRef::Remota(url) => self.ids_imagen.get(url).copied(),
            ImagenRef::Local(_) => None,
        }
    }

    /// Drop the image at `indice` from the draft.
    ///
    /// Callers removing a server-backed image must delete it remotely first
    /// (fail-closed); this only mutates local state.
    pub fn quitar_imagen(&mut self, indice: usize) -> Option<ImagenRef> {
        if indice >= self.imagenes.len() {
            return None;
        }
        let imagen = self.imagenes.remove(indice);
        if let ImagenRef::Remota(url) = &imagen {
            self.ids_imagen.remove(url);
        }
        Some(imagen)
    }

    /// Reset to a blank create-mode draft.
    pub fn limpiar(&mut self) {
        *self = Self::new();
    }

    /// Validate the draft and produce the gateway payload.
    pub fn validar(&self) -> Result<MascotaCampos, FormError> {
        self.validar_con(Local::now().date_naive())
    }

    /// Validation against an explicit reference date.
    ///
    /// Rules run in screen order; the first failure wins.
    pub fn validar_con(&self, hoy: NaiveDate) -> Result<MascotaCampos, FormError> {
        let obligatorios = [
            ("nombre", &self.nombre),
            ("especie", &self.especie),
            ("raza", &self.raza),
            ("fecha de nacimiento", &self.fecha_nacimiento),
            ("sexo", &self.sexo),
            ("ciudad", &self.ciudad),
        ];
        for (campo, valor) in obligatorios {
            if valor.trim().is_empty() {
                return Err(FormError::campo_obligatorio(campo));
            }
        }

        let nacimiento = formatear_fecha(&self.fecha_nacimiento)
            .ok_or_else(|| FormError::FechaInvalida { entrada: self.fecha_nacimiento.clone() })?;

        let edad = calcular_edad(nacimiento, hoy);
        let edad_anios = edad.anios().ok_or(FormError::EdadNoCalculada)?;

        if self.imagenes.is_empty() {
            return Err(FormError::SinImagenes);
        }

        let descripcion = if self.descripcion.trim().is_empty() {
            format!("{} {}", self.especie.trim(), self.raza.trim())
        } else {
            self.descripcion.trim().to_string()
        };

        Ok(MascotaCampos {
            nombre: self.nombre.trim().to_string(),
            especie: self.especie.trim().to_string(),
            raza: self.raza.trim().to_string(),
            fecha_nacimiento: nacimiento,
            edad_anios,
            sexo: self.sexo.trim().to_string(),
            ciudad: self.ciudad.trim().to_string(),
            descripcion,
        })
    }
}
