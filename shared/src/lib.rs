//! Shared types for Pizza Palace
//!
//! Response envelope, error codes and domain records used by the server
//! and by anything that talks to its JSON API.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
