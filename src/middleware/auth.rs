//! Identity propagation middleware
//!
//! Bearer tokens are validated at the API gateway; the gateway forwards the
//! authenticated caller's id to internal services in the `x-user-id` header.
//! This middleware lifts that header into request extensions, where the
//! `AuthUser` extractor picks it up. Requests without the header stay
//! anonymous; the guards decide whether that is fatal.

use crate::error::AppError;
use uuid::Uuid;

/// Header carrying the gateway-authenticated user id
pub const USER_ID_HEADER: &str = "x-user-id";

pub async fn auth_middleware(
    mut req: axum::extract::Request,
    next: axum::middleware::Next,
) -> Result<axum::response::Response, AppError> {
    // Allow unauthenticated access to introspection endpoints
    let path = req.uri().path();
    if matches!(path, "/health" | "/metrics" | "/openapi.json") {
        return Ok(next.run(req).await);
    }

    if let Some(value) = req.headers().get(USER_ID_HEADER) {
        let raw = value.to_str().map_err(|_| AppError::Unauthorized)?;

        // A present but malformed id is a broken gateway, not an anonymous call
        let user_id = Uuid::parse_str(raw)
            .map_err(|_| AppError::BadRequest("Invalid user id in identity header".into()))?;

        req.extensions_mut().insert(user_id);
    }

    Ok(next.run(req).await)
}
