//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            Self::ValidationError | Self::InvalidJson => StatusCode::BAD_REQUEST,

            // 401 Unauthorized
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::Forbidden => StatusCode::FORBIDDEN,

            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 405 Method Not Allowed
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            // 408 Request Timeout
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,

            // 409 Conflict
            Self::Conflict => StatusCode::CONFLICT,

            // 413 Payload Too Large
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,

            // 500 Internal Server Error
            Self::PaymentConfigError | Self::DatabaseError | Self::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
