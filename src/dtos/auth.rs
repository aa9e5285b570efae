// src/dtos/auth.rs
use serde::{Deserialize, Serialize};

/// The `?action=` query parameter selecting login or register.
#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    pub action: Option<String>,
}

/// Request body shared by both actions. Fields are optional so presence
/// checks produce defined 400s instead of deserialization failures.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: AuthUser,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
