//! Built-in sample dataset, the last step of the public-listing fallback.

use adoptafacil_types::models::Mascota;
use chrono::NaiveDate;

/// The four placeholder pets shown when no listing endpoint answers.
///
/// Keeps the adoption screen browsable with the backend down; never used for
/// owner listings or writes.
pub fn mascotas_de_muestra() -> Vec<Mascota> {
    let muestra = [
        (1, "Firulais", "Perro", "Labrador", 4, (2020, 1, 15), "Macho", "Bogotá",
         "Muy juguetón y cariñoso, ideal para familias"),
        (2, "Michi", "Gato", "Siamés", 2, (2022, 3, 10), "Hembra", "Medellín",
         "Tranquila y cariñosa, perfecta para apartamento"),
        (3, "Luna", "Perro", "Golden Retriever", 3, (2021, 6, 20), "Hembra", "Cali",
         "Muy activa, le encanta jugar en el parque"),
        (4, "Rocky", "Perro", "Bulldog", 5, (2019, 2, 5), "Macho", "Barranquilla",
         "Tranquilo y leal, buen compañero"),
    ];

    muestra
        .into_iter()
        .map(|(id, nombre, especie, raza, edad, (a, m, d), sexo, ciudad, descripcion)| Mascota {
            id,
            nombre: nombre.to_string(),
            especie: especie.to_string(),
            raza: raza.to_string(),
            edad: Some(edad),
            fecha_nacimiento: NaiveDate::from_ymd_opt(a, m, d),
            sexo: Some(sexo.to_string()),
            ciudad: Some(ciudad.to_string()),
            descripcion: Some(descripcion.to_string()),
            imagen: Some(format!("https://placehold.co/400x300?text={nombre}")),
            imagenes: Vec::new(),
            person: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn son_cuatro_y_con_datos_completos() {
        let muestra = mascotas_de_muestra();
        assert_eq!(muestra.len(), 4);
        for mascota in &muestra {
            assert!(mascota.fecha_nacimiento.is_some());
            assert!(mascota.ciudad.is_some());
            assert!(mascota.imagen.is_some());
        }
        assert_eq!(muestra[0].nombre, "Firulais");
    }
}
