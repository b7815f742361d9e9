//! API Response types
//!
//! Every route answers with the same envelope:
//!
//! ```json
//! { "success": true,  "data": { ... }, "message": "..." }
//! { "success": false, "error": "Menü alınamadı", "code": "DATABASE_ERROR" }
//! ```
//!
//! [`ApiResponse`] is a tagged enum, so a success carrying an `error` (or a
//! failure carrying `data`) cannot be built or deserialized.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Unified API response envelope
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// `success: true`
    Success {
        data: Option<T>,
        message: Option<String>,
    },
    /// `success: false`
    Error {
        error: String,
        code: Option<ErrorCode>,
    },
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self::Success {
            data: Some(data),
            message: None,
        }
    }

    /// Create a successful response with custom message
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>, code: Option<ErrorCode>) -> Self {
        Self::Error {
            error: error.into(),
            code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Borrow the payload of a success response
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => data.as_ref(),
            Self::Error { .. } => None,
        }
    }

    /// Consume the response, yielding the payload or the error it carried
    pub fn into_result(self) -> Result<Option<T>, AppError> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Error { error, code } => Err(AppError::with_message(
                code.unwrap_or(ErrorCode::InternalError),
                error,
            )),
        }
    }
}

impl ApiResponse<()> {
    /// Success without payload, with message
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self::Success {
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self::Error {
            error: err.message,
            code: Some(err.code),
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { data, message } => {
                let len = 1 + usize::from(data.is_some()) + usize::from(message.is_some());
                let mut s = serializer.serialize_struct("ApiResponse", len)?;
                s.serialize_field("success", &true)?;
                match data {
                    Some(data) => s.serialize_field("data", data)?,
                    None => s.skip_field("data")?,
                }
                match message {
                    Some(message) => s.serialize_field("message", message)?,
                    None => s.skip_field("message")?,
                }
                s.end()
            }
            Self::Error { error, code } => {
                let len = 2 + usize::from(code.is_some());
                let mut s = serializer.serialize_struct("ApiResponse", len)?;
                s.serialize_field("success", &false)?;
                s.serialize_field("error", error)?;
                match code {
                    Some(code) => s.serialize_field("code", code)?,
                    None => s.skip_field("code")?,
                }
                s.end()
            }
        }
    }
}

/// Flat wire shape, validated into [`ApiResponse`]
#[derive(Deserialize)]
struct RawEnvelope<T> {
    success: bool,
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<ErrorCode>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;
        if raw.success {
            if raw.error.is_some() || raw.code.is_some() {
                return Err(de::Error::custom(
                    "successful response must not carry error or code",
                ));
            }
            Ok(Self::Success {
                data: raw.data,
                message: raw.message,
            })
        } else {
            if raw.data.is_some() {
                return Err(de::Error::custom("error response must not carry data"));
            }
            let error = raw
                .error
                .or(raw.message)
                .ok_or_else(|| de::Error::missing_field("error"))?;
            Ok(Self::Error {
                error,
                code: raw.code,
            })
        }
    }
}

// ===== Axum Integration =====

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = match &self {
            Self::Success { .. } => http::StatusCode::OK,
            Self::Error { code, .. } => code
                .map(|c| c.http_status())
                .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR),
        };

        (status, Json(self)).into_response()
    }
}
