//! Unified error system
//!
//! - [`ErrorCode`]: the code table every route reports in `code`
//! - [`ErrorCategory`]: request / auth / payment / system grouping
//! - [`AppError`]: code + message, renders as the error envelope
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//! use shared::ApiResponse;
//!
//! let err = AppError::database("Menü alınamadı");
//! assert_eq!(err.code, ErrorCode::DatabaseError);
//!
//! let response: ApiResponse<()> = err.into();
//! assert!(!response.is_success());
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
