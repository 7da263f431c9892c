//! Profile handlers (read and partial update of the caller's account)

use auth_core::domain::{AccountProfile, ProfilePatch};
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::extractors::CurrentSession;
use crate::response::{reject, ApiResponse, Rejection};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountProfile> for ProfileDto {
    fn from(profile: AccountProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Absent fields stay untouched; only the allow-listed pair is mutable.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,
}

/// GET /api/v1/me
pub async fn get_me(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Json<ApiResponse<ProfileDto>> {
    let profile = state.auth.get_profile(&session.account).await;
    Json(ApiResponse::success(ProfileDto::from(profile)))
}

/// PUT /api/v1/me
pub async fn update_me(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileDto>>, Rejection> {
    payload
        .validate()
        .map_err(|e| reject(&auth_core::DomainError::Validation(e.to_string())))?;

    let profile = state
        .auth
        .update_profile(
            &session.account.id,
            ProfilePatch {
                first_name: payload.first_name,
                last_name: payload.last_name,
            },
        )
        .await
        .map_err(|e| reject(&e))?;

    Ok(Json(ApiResponse::success(ProfileDto::from(profile))))
}
