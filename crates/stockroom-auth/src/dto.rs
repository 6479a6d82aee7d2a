use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub display_name: String,
}

#[derive(Serialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role: uuid::Uuid,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub display_name: String,
    pub role: uuid::Uuid,
}

#[derive(Serialize)]
pub struct UserRow {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub role: uuid::Uuid,
    pub active: bool,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub role: uuid::Uuid,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize)]
pub struct RoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct RoleRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Slim role listing for selection controls.
#[derive(Serialize)]
pub struct RoleName {
    pub id: uuid::Uuid,
    pub name: String,
}
