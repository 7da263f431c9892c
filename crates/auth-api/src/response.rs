//! API response wrapper and error mapping

use auth_core::error::DomainError;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

pub type Rejection = (StatusCode, Json<ApiResponse<()>>);

/// Exhaustive mapping from the domain taxonomy to HTTP. Internal variants
/// collapse to an opaque 500; authenticate failures stay uniform.
pub fn reject(err: &DomainError) -> Rejection {
    let (status, code, message) = match err {
        DomainError::DuplicateIdentity(_) => (
            StatusCode::CONFLICT,
            "DUPLICATE_IDENTITY",
            "Email already registered".to_string(),
        ),
        DomainError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "Incorrect email or password".to_string(),
        ),
        DomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Could not validate credentials".to_string(),
        ),
        DomainError::Validation(detail) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", detail.clone())
        }
        DomainError::DependencyUnavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "DEPENDENCY_UNAVAILABLE",
            "A backing service is temporarily unavailable".to_string(),
        ),
        DomainError::PasswordHash(_)
        | DomainError::TokenGeneration(_)
        | DomainError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Internal server error".to_string(),
        ),
    };
    (status, Json(ApiResponse::error(code, &message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_failures_are_uniform() {
        let (status, body) = reject(&DomainError::Unauthorized);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.0.error.as_ref().unwrap().code, "UNAUTHORIZED");
        assert!(!body.0.success);
    }

    #[test]
    fn test_internal_errors_do_not_leak_detail() {
        let (status, body) = reject(&DomainError::Database("connection string leaked".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = &body.0.error.as_ref().unwrap().message;
        assert!(!message.contains("connection string"));
    }

    #[test]
    fn test_transient_failures_are_retryable_status() {
        let (status, _) = reject(&DomainError::DependencyUnavailable("redis".into()));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
