//! Static catalog data offered by the form pickers.

/// Dog breeds offered when `especie == "Perro"`.
pub const RAZAS_PERROS: &[&str] = &[
    "Labrador Retriever",
    "Golden Retriever",
    "Pastor Alemán",
    "Bulldog Francés",
    "Beagle",
    "Poodle",
    "Rottweiler",
    "Yorkshire Terrier",
    "Boxer",
    "Dachshund",
    "Siberian Husky",
    "Border Collie",
    "Chihuahua",
    "Shih Tzu",
    "Boston Terrier",
    "Pomeranian",
    "Cocker Spaniel",
    "Mastín",
    "Doberman",
    "Schnauzer",
    "Pitbull",
    "Jack Russell Terrier",
    "Maltes",
    "Bichón Frisé",
    "Akita",
    "San Bernardo",
    "Terranova",
    "Weimaraner",
    "Basset Hound",
    "Mestizo",
    "Criollo",
    "Otra",
];

/// Cat breeds offered when `especie == "Gato"`.
pub const RAZAS_GATOS: &[&str] = &[
    "Persa",
    "Maine Coon",
    "Siamés",
    "Ragdoll",
    "British Shorthair",
    "Abisinio",
    "Bengala",
    "Russian Blue",
    "Scottish Fold",
    "Sphynx",
    "Norwegian Forest",
    "Birman",
    "Oriental",
    "Burmese",
    "Tonkinese",
    "Manx",
    "Devon Rex",
    "Cornish Rex",
    "Angora Turco",
    "Chartreux",
    "Bombay",
    "Savannah",
    "Europeo",
    "Criollo",
    "Mestizo",
    "Callejero",
    "Otra",
];

/// Main Colombian cities offered by the city picker.
pub const CIUDADES_COLOMBIA: &[&str] = &[
    "Apartadó",
    "Arauca",
    "Armenia",
    "Barranquilla",
    "Bello",
    "Bogotá",
    "Bucaramanga",
    "Buenaventura",
    "Cali",
    "Cartagena",
    "Cartago",
    "Chía",
    "Cúcuta",
    "Duitama",
    "Envigado",
    "Facatativá",
    "Florencia",
    "Floridablanca",
    "Fusagasugá",
    "Girardot",
    "Girón",
    "Ibagué",
    "Inírida",
    "Itagüí",
    "Leticia",
    "Magangué",
    "Maicao",
    "Manizales",
    "Medellín",
    "Mitú",
    "Mocoa",
    "Montería",
    "Mosquera",
    "Neiva",
    "Palmira",
    "Pasto",
    "Pereira",
    "Piedecuesta",
    "Popayán",
    "Puerto Carreño",
    "Quibdó",
    "Riohacha",
    "San Andrés",
    "Santa Marta",
    "Sincelejo",
    "Soacha",
    "Sogamoso",
    "Soledad",
    "Tuluá",
    "Tunja",
    "Valledupar",
    "Villavicencio",
    "Yopal",
    "Zipaquirá",
];

/// Breed list for a species; unknown species fall back to dog breeds, the
/// screen default.
pub fn razas_para(especie: &str) -> &'static [&'static str] {
    match especie {
        "Gato" => RAZAS_GATOS,
        _ => RAZAS_PERROS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn razas_cambian_con_la_especie() {
        assert!(razas_para("Perro").contains(&"Labrador Retriever"));
        assert!(razas_para("Gato").contains(&"Siamés"));
        assert_eq!(razas_para("Loro"), RAZAS_PERROS);
    }

    #[test]
    fn ambas_listas_admiten_otra() {
        assert!(RAZAS_PERROS.contains(&"Otra"));
        assert!(RAZAS_GATOS.contains(&"Otra"));
    }
}
