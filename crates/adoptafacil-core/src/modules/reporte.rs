//! HTML report of the current pet listings.
//!
//! Renders the same table the mobile app exports: name, species, breed and
//! derived age, with a title block and generation timestamp. The result is a
//! standalone HTML document; converting it to PDF and opening the share
//! sheet are device capabilities outside this crate.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use adoptafacil_types::fecha::calcular_edad;
use adoptafacil_types::models::Mascota;
use chrono::{Local, NaiveDateTime};

/// Title block of a generated report.
#[derive(Debug, Clone)]
pub struct ReporteOpciones {
    /// e.g. "Reporte General de Mascotas" / "Mis Mascotas Registradas"
    pub titulo: String,
    /// e.g. "Sistema AdoptaFácil - Vista Administrador" / "Aliado: Ana"
    pub subtitulo: Option<String>,
}

/// Render the report with the current local time.
pub fn generar_reporte_html(mascotas: &[Mascota], opciones: &ReporteOpciones) -> String {
    generar_reporte_html_con(mascotas, opciones, Local::now().naive_local())
}

/// Render the report against an explicit timestamp.
pub fn generar_reporte_html_con(
    mascotas: &[Mascota],
    opciones: &ReporteOpciones,
    ahora: NaiveDateTime,
) -> String {
    let mut filas = String::new();
    for (i, mascota) in mascotas.iter().enumerate() {
        let fondo = if i % 2 == 0 { " style=\"background-color: #f8f9fa;\"" } else { "" };
        let edad = match mascota.fecha_nacimiento {
            Some(nacimiento) => calcular_edad(nacimiento, ahora.date()).to_string(),
            None => mascota
                .edad
                .map(|anios| format!("{anios} años"))
                .unwrap_or_else(|| "—".to_string()),
        };
        filas.push_str(&format!(
            "        <tr{fondo}>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>\n",
            escapar(&mascota.nombre),
            escapar(&mascota.especie),
            escapar(&mascota.raza),
            escapar(&edad),
        ));
    }

    let subtitulo = opciones
        .subtitulo
        .as_deref()
        .map(|s| format!("      <h2>{}</h2>\n", escapar(s)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
  <head>
    <meta charset="utf-8" />
    <title>{titulo}</title>
    <style>
      body {{ font-family: Helvetica, Arial, sans-serif; margin: 32px; color: #212529; }}
      h1 {{ color: #0d6efd; margin-bottom: 4px; }}
      h2 {{ color: #6c757d; font-weight: normal; margin-top: 0; }}
      .info-section p {{ margin: 2px 0; }}
      table {{ width: 100%; border-collapse: collapse; margin-top: 16px; }}
      th {{ background-color: #0d6efd; color: white; text-transform: uppercase; padding: 8px; text-align: left; }}
      td {{ padding: 8px; border-bottom: 1px solid #dee2e6; }}
    </style>
  </head>
  <body>
    <h1>{titulo}</h1>
{subtitulo}    <div class="info-section">
      <p><strong>Fecha:</strong> {fecha}</p>
      <p><strong>Total de mascotas:</strong> {total}</p>
      <p><strong>Sistema:</strong> AdoptaFácil</p>
    </div>
    <table>
      <thead>
        <tr>
          <th>Nombre</th>
          <th>Especie</th>
          <th>Raza</th>
          <th>Edad</th>
        </tr>
      </thead>
      <tbody>
{filas}      </tbody>
    </table>
  </body>
</html>
"#,
        titulo = escapar(&opciones.titulo),
        fecha = ahora.format("%d/%m/%Y %H:%M"),
        total = mascotas.len(),
    )
}

/// Write a rendered report under `dir`, returning the final path.
pub fn guardar_reporte(dir: &Path, nombre_archivo: &str, html: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let ruta = dir.join(nombre_archivo);
    fs::write(&ruta, html)?;
    Ok(ruta)
}

fn escapar(texto: &str) -> String {
    texto
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn mascota(nombre: &str, nacimiento: Option<NaiveDate>) -> Mascota {
        Mascota {
            id: 1,
            nombre: nombre.to_string(),
            especie: "Perro".to_string(),
            raza: "Labrador".to_string(),
            edad: Some(2),
            fecha_nacimiento: nacimiento,
            sexo: None,
            ciudad: None,
            descripcion: None,
            imagen: None,
            imagenes: Vec::new(),
            person: None,
        }
    }

    fn ahora() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 0).unwrap()
    }

    #[test]
    fn incluye_titulo_filas_y_total() {
        let opciones = ReporteOpciones {
            titulo: "Mis Mascotas Registradas".into(),
            subtitulo: Some("Aliado: Ana".into()),
        };
        let mascotas = vec![
            mascota("Firulais", NaiveDate::from_ymd_opt(2020, 1, 15)),
            mascota("Michi", None),
        ];
        let html = generar_reporte_html_con(&mascotas, &opciones, ahora());

        assert!(html.contains("Mis Mascotas Registradas"));
        assert!(html.contains("Aliado: Ana"));
        assert!(html.contains("Firulais"));
        assert!(html.contains("4 años")); // derivada de la fecha de nacimiento
        assert!(html.contains("2 años")); // metadato del backend cuando no hay fecha
        assert!(html.contains("Total de mascotas:</strong> 2"));
        assert!(html.contains("15/01/2024"));
    }

    #[test]
    fn escapa_html_en_los_datos() {
        let opciones = ReporteOpciones { titulo: "Reporte".into(), subtitulo: None };
        let html = generar_reporte_html_con(
            &[mascota("<script>alert(1)</script>", None)],
            &opciones,
            ahora(),
        );
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn guarda_el_archivo_en_disco() {
        let dir = tempfile::tempdir().unwrap();
        let opciones = ReporteOpciones { titulo: "Reporte".into(), subtitulo: None };
        let html = generar_reporte_html_con(&[], &opciones, ahora());
        let ruta =
            guardar_reporte(dir.path(), "reporte_aliado_1705314600.html", &html).unwrap();
        assert!(ruta.exists());
        assert!(std::fs::read_to_string(ruta).unwrap().contains("Reporte"));
    }
}
