//! User/person model and roles.

use serde::{Deserialize, Serialize};

/// A platform user (`/persons` resource, also embedded in auth responses and
/// admin pet listings).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_person: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Persona {
    /// Display name, `"Nombre Apellido"` with graceful degradation.
    pub fn nombre_completo(&self) -> String {
        let completo = format!("{} {}", self.name, self.last_name);
        completo.trim().to_string()
    }

    pub fn role_type(&self) -> Option<RoleType> {
        self.role.as_ref().map(|r| r.role_type)
    }

    /// Whether this user may manage pet listings at all.
    pub fn puede_gestionar_mascotas(&self) -> bool {
        matches!(self.role_type(), Some(RoleType::Admin) | Some(RoleType::Aliado))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_role: Option<i64>,
    pub role_type: RoleType,
}

/// Role tags as stored by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoleType {
    /// Platform administrator: sees every listing, with owner info.
    #[serde(rename = "ADMIN")]
    Admin,
    /// Shelter/rescuer partner: manages their own listings.
    #[serde(rename = "ALIADO")]
    Aliado,
    /// Adopter: browse-only.
    #[serde(rename = "CLIENTE")]
    Cliente,
}

impl RoleType {
    /// Tag as it appears on the wire and in URL paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Admin => "ADMIN",
            RoleType::Aliado => "ALIADO",
            RoleType::Cliente => "CLIENTE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_usuario_con_rol() {
        let json = r#"{
            "idPerson": 3,
            "name": "Ana",
            "lastName": "Gómez",
            "email": "ana@example.com",
            "role": {"idRole": 2, "roleType": "ALIADO"}
        }"#;
        let p: Persona = serde_json::from_str(json).unwrap();
        assert_eq!(p.role_type(), Some(RoleType::Aliado));
        assert_eq!(p.nombre_completo(), "Ana Gómez");
        assert!(p.puede_gestionar_mascotas());
    }

    #[test]
    fn cliente_no_gestiona_mascotas() {
        let p = Persona {
            id_person: Some(1),
            name: "Luis".into(),
            last_name: String::new(),
            email: "luis@example.com".into(),
            role: Some(Role { id_role: None, role_type: RoleType::Cliente }),
        };
        assert!(!p.puede_gestionar_mascotas());
        assert_eq!(p.nombre_completo(), "Luis");
    }

    #[test]
    fn etiqueta_de_rol_coincide_con_el_wire() {
        assert_eq!(RoleType::Admin.as_str(), "ADMIN");
        assert_eq!(serde_json::to_string(&RoleType::Aliado).unwrap(), "\"ALIADO\"");
        assert_eq!(RoleType::Cliente.as_str(), "CLIENTE");
    }
}
