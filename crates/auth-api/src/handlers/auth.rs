//! Authentication handlers (register, login, logout)

use auth_core::domain::NewAccount;
use auth_core::services::IssuedToken;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::extractors::CurrentSession;
use crate::response::{reject, ApiResponse, Rejection};
use crate::state::AppState;

use super::profile::ProfileDto;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProfileDto>>), Rejection> {
    payload
        .validate()
        .map_err(|e| reject(&auth_core::DomainError::Validation(e.to_string())))?;

    let profile = state
        .auth
        .register(NewAccount {
            email: payload.email,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
        })
        .await
        .map_err(|e| reject(&e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ProfileDto::from(profile))),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<IssuedToken>>, Rejection> {
    let issued = state
        .auth
        .login(&payload.email, &payload.password)
        .await
        .map_err(|e| reject(&e))?;

    Ok(Json(ApiResponse::success(issued)))
}

/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Result<Json<ApiResponse<()>>, Rejection> {
    state
        .auth
        .logout(&session.token)
        .await
        .map_err(|e| reject(&e))?;

    Ok(Json(ApiResponse::success(())))
}
