//! Error codes shared by every API route
//!
//! The wire value of each code is its SCREAMING_SNAKE_CASE name, e.g.
//! `"DATABASE_ERROR"`. Default messages are the Turkish texts shown to
//! storefront and admin panel users.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::ErrorCategory;

/// Unified error code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ==================== Request ====================
    /// Request payload failed validation
    ValidationError,
    /// Request body is not valid JSON
    InvalidJson,
    /// Resource not found
    NotFound,
    /// HTTP method not supported on this route
    MethodNotAllowed,
    /// Resource already exists (e.g. duplicate username)
    Conflict,
    /// Request body exceeds the accepted size
    PayloadTooLarge,
    /// Request did not finish within the configured timeout
    RequestTimeout,

    // ==================== Auth ====================
    /// No valid session cookie
    Unauthorized,
    /// Username or password mismatch
    InvalidCredentials,
    /// Authenticated but not permitted
    Forbidden,

    // ==================== Payment ====================
    /// Payment provider credentials are not configured
    PaymentConfigError,

    // ==================== System ====================
    /// Database error
    DatabaseError,
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Every code, in declaration order
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::ValidationError,
        ErrorCode::InvalidJson,
        ErrorCode::NotFound,
        ErrorCode::MethodNotAllowed,
        ErrorCode::Conflict,
        ErrorCode::PayloadTooLarge,
        ErrorCode::RequestTimeout,
        ErrorCode::Unauthorized,
        ErrorCode::InvalidCredentials,
        ErrorCode::Forbidden,
        ErrorCode::PaymentConfigError,
        ErrorCode::DatabaseError,
        ErrorCode::InternalError,
    ];

    /// Wire representation (same as the serde name)
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::RequestTimeout => "REQUEST_TIMEOUT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::PaymentConfigError => "PAYMENT_CONFIG_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Default user-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Geçersiz istek verisi",
            ErrorCode::InvalidJson => "Geçersiz JSON gövdesi",
            ErrorCode::NotFound => "Kayıt bulunamadı",
            ErrorCode::MethodNotAllowed => "Method not allowed",
            ErrorCode::Conflict => "Kayıt zaten mevcut",
            ErrorCode::PayloadTooLarge => "İstek gövdesi çok büyük",
            ErrorCode::RequestTimeout => "İstek zaman aşımına uğradı",
            ErrorCode::Unauthorized => "Oturum açmanız gerekiyor",
            ErrorCode::InvalidCredentials => "Kullanıcı adı veya şifre hatalı",
            ErrorCode::Forbidden => "Bu işlem için yetkiniz yok",
            ErrorCode::PaymentConfigError => "Ödeme yapılandırması eksik",
            ErrorCode::DatabaseError => "Veritabanı hatası",
            ErrorCode::InternalError => "Sunucu hatası",
        }
    }

    /// Category of this code
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::ValidationError
            | ErrorCode::InvalidJson
            | ErrorCode::NotFound
            | ErrorCode::MethodNotAllowed
            | ErrorCode::Conflict
            | ErrorCode::PayloadTooLarge
            | ErrorCode::RequestTimeout => ErrorCategory::Request,
            ErrorCode::Unauthorized | ErrorCode::InvalidCredentials | ErrorCode::Forbidden => {
                ErrorCategory::Auth
            }
            ErrorCode::PaymentConfigError => ErrorCategory::Payment,
            ErrorCode::DatabaseError | ErrorCode::InternalError => ErrorCategory::System,
        }
    }
}

/// Returned when parsing an unknown code string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidErrorCode(pub String);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl FromStr for ErrorCode {
    type Err = InvalidErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| InvalidErrorCode(s.to_string()))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
