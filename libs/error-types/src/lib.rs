//! Shared HTTP error envelope
//!
//! Every service returns errors in the same JSON shape so clients and the
//! gateway can handle failures uniformly.

use serde::{Deserialize, Serialize};

/// Stable machine-readable error codes.
///
/// Codes are part of the public API contract; renaming one is a breaking
/// change for clients.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const ACCESS_DENIED: &str = "ACCESS_DENIED";
    pub const EVENT_NOT_FOUND: &str = "EVENT_NOT_FOUND";
    pub const MISSING_EVENT_ID: &str = "MISSING_EVENT_ID";
    pub const UNKNOWN_PERMISSION: &str = "UNKNOWN_PERMISSION";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
}

/// JSON body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short human-readable title ("Forbidden", "Bad Request", ...)
    pub error: String,
    /// Detailed message for debugging; safe to show to API consumers
    pub message: String,
    /// HTTP status code duplicated in the body
    pub status: u16,
    /// Coarse classification ("authorization_error", "validation_error", ...)
    pub error_type: String,
    /// Stable machine-readable code from [`error_codes`]
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str, status: u16, error_type: &str, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            status,
            error_type: error_type.to_string(),
            code: code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat_envelope() {
        let resp = ErrorResponse::new(
            "Forbidden",
            "forbidden",
            403,
            "authorization_error",
            error_codes::ACCESS_DENIED,
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], 403);
        assert_eq!(json["code"], "ACCESS_DENIED");
        assert_eq!(json["error_type"], "authorization_error");
    }
}
