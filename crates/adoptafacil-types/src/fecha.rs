//! Birth-date parsing and age derivation.
//!
//! The backend stores a pet's birth date (`fechaNacimiento`, ISO date); the
//! displayed age is always derived from it. This module is the single place
//! where that derivation happens; ages are never parsed back out of
//! formatted strings.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Normalize a user-typed birth date.
///
/// Accepts `YYYY-MM-DD` and `YYYY/MM/DD`, with 2- or 4-digit years. Two-digit
/// years below 30 resolve to `20XX`, everything else to `19XX`. Returns
/// `None` for out-of-range years (1900–2100), months, days, non-numeric
/// fields, or dates that do not exist on the calendar. Callers treat `None`
/// as a hard validation error, not a warning.
pub fn formatear_fecha(entrada: &str) -> Option<NaiveDate> {
    let limpia = entrada.trim().replace('/', "-");
    if limpia.is_empty() {
        return None;
    }

    let partes: Vec<&str> = limpia.split('-').collect();
    if partes.len() != 3 {
        return None;
    }

    let mut anio: i32 = partes[0].parse().ok()?;
    if partes[0].len() == 2 {
        anio += if anio < 30 { 2000 } else { 1900 };
    }
    let mes: u32 = partes[1].parse().ok()?;
    let dia: u32 = partes[2].parse().ok()?;

    if !(1900..=2100).contains(&anio) || !(1..=12).contains(&mes) || !(1..=31).contains(&dia) {
        return None;
    }

    // Rejects impossible calendar dates (e.g. Feb 31).
    NaiveDate::from_ymd_opt(anio, mes, dia)
}

/// Exact age decomposition relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edad {
    /// Birth date lies in the future.
    Invalida,
    /// Born on the reference date itself.
    RecienNacido,
    /// Whole years, months and days elapsed since birth.
    Cumplida { anios: u32, meses: u32, dias: u32 },
}

impl Edad {
    /// Whole-year count submitted to the backend (`None` for invalid dates).
    pub fn anios(&self) -> Option<u32> {
        match self {
            Edad::Invalida => None,
            Edad::RecienNacido => Some(0),
            Edad::Cumplida { anios, .. } => Some(*anios),
        }
    }

    pub fn es_valida(&self) -> bool {
        !matches!(self, Edad::Invalida)
    }
}

impl fmt::Display for Edad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edad::Invalida => write!(f, "Fecha inválida"),
            Edad::RecienNacido => write!(f, "Recién nacido"),
            Edad::Cumplida { anios, meses, dias } => {
                let mut partes = Vec::new();
                if *anios > 0 {
                    partes.push(plural(*anios, "año", "años"));
                }
                if *meses > 0 {
                    partes.push(plural(*meses, "mes", "meses"));
                }
                if *dias > 0 {
                    partes.push(plural(*dias, "día", "días"));
                }
                write!(f, "{}", partes.join(", "))
            }
        }
    }
}

fn plural(n: u32, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Derive the exact age at `hoy` from a birth date.
///
/// Days borrow from the length of the month preceding `hoy`; months borrow
/// from the year. A birth date after `hoy` yields [`Edad::Invalida`].
pub fn calcular_edad(nacimiento: NaiveDate, hoy: NaiveDate) -> Edad {
    if nacimiento > hoy {
        return Edad::Invalida;
    }
    if nacimiento == hoy {
        return Edad::RecienNacido;
    }

    let mut anios = hoy.year() - nacimiento.year();
    let mut meses = hoy.month() as i32 - nacimiento.month() as i32;
    let mut dias = hoy.day() as i32 - nacimiento.day() as i32;

    if dias < 0 {
        meses -= 1;
        dias += dias_del_mes_anterior(hoy) as i32;
    }
    if meses < 0 {
        anios -= 1;
        meses += 12;
    }

    if anios == 0 && meses == 0 && dias == 0 {
        Edad::RecienNacido
    } else {
        Edad::Cumplida {
            anios: anios as u32,
            meses: meses as u32,
            dias: dias as u32,
        }
    }
}

/// Number of days in the month preceding the one `fecha` falls in.
fn dias_del_mes_anterior(fecha: NaiveDate) -> u32 {
    let (anio, mes) = if fecha.month() == 1 {
        (fecha.year() - 1, 12)
    } else {
        (fecha.year(), fecha.month() - 1)
    };
    // The 1st of the month `fecha` is in, minus one day, is the last day of
    // the previous month. from_ymd_opt cannot fail for day 1.
    match NaiveDate::from_ymd_opt(anio, mes, 1) {
        Some(primero) => {
            let siguiente = if mes == 12 {
                NaiveDate::from_ymd_opt(anio + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(anio, mes + 1, 1)
            };
            siguiente
                .map(|s| s.signed_duration_since(primero).num_days() as u32)
                .unwrap_or(30)
        }
        None => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(anio: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(anio, mes, dia).unwrap()
    }

    #[test]
    fn formatea_fecha_iso() {
        assert_eq!(formatear_fecha("2020-01-15"), Some(d(2020, 1, 15)));
        assert_eq!(formatear_fecha("2020-01-15").unwrap().to_string(), "2020-01-15");
    }

    #[test]
    fn acepta_separador_con_barras() {
        assert_eq!(formatear_fecha("2020/01/15"), Some(d(2020, 1, 15)));
        assert_eq!(formatear_fecha(" 1999/12/31 "), Some(d(1999, 12, 31)));
    }

    #[test]
    fn expande_anios_de_dos_digitos() {
        // < 30 → 20XX, >= 30 → 19XX
        assert_eq!(formatear_fecha("20-05-01"), Some(d(2020, 5, 1)));
        assert_eq!(formatear_fecha("29-05-01"), Some(d(2029, 5, 1)));
        assert_eq!(formatear_fecha("30-05-01"), Some(d(1930, 5, 1)));
        assert_eq!(formatear_fecha("95-05-01"), Some(d(1995, 5, 1)));
    }

    #[test]
    fn rechaza_fechas_fuera_de_rango() {
        assert_eq!(formatear_fecha("1899-01-01"), None);
        assert_eq!(formatear_fecha("2101-01-01"), None);
        assert_eq!(formatear_fecha("2020-13-01"), None);
        assert_eq!(formatear_fecha("2020-00-01"), None);
        assert_eq!(formatear_fecha("2020-01-32"), None);
        assert_eq!(formatear_fecha("2020-01-00"), None);
    }

    #[test]
    fn rechaza_entradas_malformadas() {
        assert_eq!(formatear_fecha(""), None);
        assert_eq!(formatear_fecha("   "), None);
        assert_eq!(formatear_fecha("2020-01"), None);
        assert_eq!(formatear_fecha("2020-01-15-3"), None);
        assert_eq!(formatear_fecha("hoy"), None);
        assert_eq!(formatear_fecha("2020-ene-15"), None);
    }

    #[test]
    fn rechaza_fechas_inexistentes() {
        assert_eq!(formatear_fecha("2021-02-29"), None);
        assert_eq!(formatear_fecha("2020-02-29"), Some(d(2020, 2, 29)));
        assert_eq!(formatear_fecha("2020-04-31"), None);
    }

    #[test]
    fn edad_en_cumpleanios_exacto() {
        let edad = calcular_edad(d(2020, 1, 15), d(2024, 1, 15));
        assert_eq!(edad, Edad::Cumplida { anios: 4, meses: 0, dias: 0 });
        assert_eq!(edad.to_string(), "4 años");
        assert_eq!(edad.anios(), Some(4));
    }

    #[test]
    fn edad_con_meses_y_dias() {
        let edad = calcular_edad(d(2020, 1, 15), d(2021, 3, 18));
        assert_eq!(edad, Edad::Cumplida { anios: 1, meses: 2, dias: 3 });
        assert_eq!(edad.to_string(), "1 año, 2 meses, 3 días");
    }

    #[test]
    fn edad_pide_prestado_dias_del_mes_anterior() {
        // 2023-12-20 → 2024-01-10: 21 días (diciembre tiene 31)
        let edad = calcular_edad(d(2023, 12, 20), d(2024, 1, 10));
        assert_eq!(edad, Edad::Cumplida { anios: 0, meses: 0, dias: 21 });
        assert_eq!(edad.to_string(), "21 días");
    }

    #[test]
    fn edad_futura_es_invalida() {
        let edad = calcular_edad(d(2030, 1, 1), d(2024, 1, 15));
        assert_eq!(edad, Edad::Invalida);
        assert_eq!(edad.to_string(), "Fecha inválida");
        assert_eq!(edad.anios(), None);
    }

    #[test]
    fn nacido_hoy_es_recien_nacido() {
        let edad = calcular_edad(d(2024, 1, 15), d(2024, 1, 15));
        assert_eq!(edad, Edad::RecienNacido);
        assert_eq!(edad.to_string(), "Recién nacido");
        assert_eq!(edad.anios(), Some(0));
    }

    #[test]
    fn decomposicion_no_negativa_suma_consistente() {
        // La descomposición reconstruye la fecha de nacimiento al restarla de hoy.
        let casos = [
            (d(2020, 1, 15), d(2024, 6, 2)),
            (d(2019, 11, 30), d(2024, 3, 1)),
            (d(2024, 1, 14), d(2024, 1, 15)),
        ];
        for (nac, hoy) in casos {
            match calcular_edad(nac, hoy) {
                Edad::Cumplida { anios, meses, dias } => {
                    assert!(anios < 200 && meses < 12 && dias < 32);
                }
                otra => panic!("se esperaba Edad::Cumplida, fue {otra:?}"),
            }
        }
    }
}
