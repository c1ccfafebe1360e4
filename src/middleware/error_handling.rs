use crate::error::AppError;
use axum::{http::StatusCode, response::IntoResponse, Json};
use error_types::ErrorResponse;

/// Map domain errors to HTTP responses
pub fn map_error(err: &AppError) -> (StatusCode, ErrorResponse) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let (error_type, code) = match err {
        AppError::BadRequest(_) => ("validation_error", error_types::error_codes::INVALID_REQUEST),
        AppError::MissingEventId => (
            "validation_error",
            error_types::error_codes::MISSING_EVENT_ID,
        ),
        AppError::UnknownPermission(_) => (
            "validation_error",
            error_types::error_codes::UNKNOWN_PERMISSION,
        ),
        AppError::Unauthorized => (
            "authentication_error",
            error_types::error_codes::INVALID_CREDENTIALS,
        ),
        AppError::Forbidden => ("authorization_error", error_types::error_codes::ACCESS_DENIED),
        AppError::NotFound => (
            "not_found_error",
            error_types::error_codes::EVENT_NOT_FOUND,
        ),
        AppError::Config(_) => (
            "server_error",
            error_types::error_codes::INTERNAL_SERVER_ERROR,
        ),
        AppError::StartServer(_) => (
            "server_error",
            error_types::error_codes::INTERNAL_SERVER_ERROR,
        ),
        AppError::InvalidRole(_) => ("server_error", error_types::error_codes::DATABASE_ERROR),
        AppError::Database(_) => ("server_error", error_types::error_codes::DATABASE_ERROR),
        AppError::Internal => (
            "server_error",
            error_types::error_codes::INTERNAL_SERVER_ERROR,
        ),
    };

    let message = err.to_string();
    let response = ErrorResponse::new(
        match status {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::UNAUTHORIZED => "Unauthorized",
            StatusCode::FORBIDDEN => "Forbidden",
            StatusCode::NOT_FOUND => "Not Found",
            StatusCode::INTERNAL_SERVER_ERROR => "Internal Server Error",
            _ => "Error",
        },
        &message,
        status.as_u16(),
        error_type,
        code,
    );

    (status, response)
}

pub fn into_response(err: AppError) -> impl IntoResponse {
    let (status, response) = map_error(&err);
    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_maps_to_403_authorization_error() {
        let (status, body) = map_error(&AppError::Forbidden);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.error_type, "authorization_error");
        assert_eq!(body.code, error_types::error_codes::ACCESS_DENIED);
    }

    #[test]
    fn test_unknown_permission_is_a_client_error() {
        let (status, body) = map_error(&AppError::UnknownPermission("is_owner".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error_type, "validation_error");
        assert!(body.message.contains("is_owner"));
    }

    #[test]
    fn test_missing_event_id_is_a_client_error() {
        let (status, body) = map_error(&AppError::MissingEventId);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, error_types::error_codes::MISSING_EVENT_ID);
    }

    #[test]
    fn test_unauthenticated_maps_to_401() {
        let (status, _) = map_error(&AppError::Unauthorized);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
