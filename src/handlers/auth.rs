// src/handlers/auth.rs
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::Error as SqlxError;
use tracing::instrument;

use crate::dtos::auth::{AuthQuery, AuthRequest, AuthUser, LoginResponse, MessageResponse};
use crate::error::AppError;
use crate::repositories::user::UserRepository;
use crate::state::AppState;

fn map_unique_violation(err: SqlxError, message: &str) -> AppError {
    match err {
        SqlxError::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::conflict(message)
        }
        other => other.into(),
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

// POST /auth?action=<login|register> - single dispatch endpoint for both actions
#[instrument(skip(state, body))]
pub async fn authenticate(
    State(state): State<AppState>,
    Query(query): Query<AuthQuery>,
    body: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = body.map_err(|_| AppError::validation("Invalid JSON data."))?;

    // Presence checks run before any database access.
    if is_blank(payload.email.as_deref()) || is_blank(payload.password.as_deref()) {
        return Err(AppError::validation("Email and password are required."));
    }
    let email = payload.email.as_deref().unwrap_or_default();
    let password = payload.password.as_deref().unwrap_or_default();

    match query.action.as_deref() {
        Some("login") => login(&state, email, password).await,
        Some("register") => register(&state, email, password, payload.name.as_deref()).await,
        _ => Err(AppError::validation("Invalid authentication action.")),
    }
}

/// Unknown email and wrong password collapse into one 401 so the response
/// does not leak which half was wrong.
async fn login(state: &AppState, email: &str, password: &str) -> Result<Response, AppError> {
    let users = UserRepository::new(state.db_pool.clone());
    let user = users.find_by_email(email).await?;

    let verified = match &user {
        Some(user) => verify(password, &user.password_hash)
            .map_err(|e| AppError::internal(format!("Password verify error: {e}")))?,
        None => false,
    };

    match user {
        Some(user) if verified => {
            let body = LoginResponse {
                message: "Login successful!".to_string(),
                user: AuthUser {
                    email: user.email,
                    name: user.name,
                },
            };
            Ok((StatusCode::OK, Json(body)).into_response())
        }
        _ => Err(AppError::unauthorized("Invalid email or password.")),
    }
}

async fn register(
    state: &AppState,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<Response, AppError> {
    if is_blank(name) {
        return Err(AppError::validation("Name is required for registration."));
    }
    let name = name.unwrap_or_default();

    let users = UserRepository::new(state.db_pool.clone());
    if users.find_by_email(email).await?.is_some() {
        return Err(AppError::conflict("User with this email already exists."));
    }

    let password_hash = hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Hash error: {e}")))?;

    // The check above is not atomic with this insert; the UNIQUE constraint
    // on email catches the race and maps to the same conflict response.
    users
        .insert(name, email, &password_hash)
        .await
        .map_err(|e| map_unique_violation(e, "User with this email already exists."))?;

    let body = MessageResponse {
        message: "Registration successful! Please login.".to_string(),
    };
    Ok((StatusCode::CREATED, Json(body)).into_response())
}
