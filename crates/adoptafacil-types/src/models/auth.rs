//! Auth request/response DTOs (`/auth/login`, `/auth/register`).

use serde::{Deserialize, Serialize};

use super::{Persona, RoleType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: RoleType,
}

/// Successful authentication: bearer token plus the user profile the app
/// mirrors in its session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type", default = "bearer")]
    pub token_type: String,
    pub user: Persona,
}

fn bearer() -> String {
    "Bearer".to_string()
}
