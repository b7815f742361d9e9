//! Error category classification

use serde::{Deserialize, Serialize};

/// Error category, used to decide what gets logged at the API boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Caller sent something we cannot act on (4xx)
    Request,
    /// Session / credential problems
    Auth,
    /// Payment provider integration
    Payment,
    /// Database or internal failures (5xx, always logged)
    System,
}

impl ErrorCategory {
    /// Whether errors in this category are logged at error level
    pub const fn is_logged(&self) -> bool {
        matches!(self, ErrorCategory::System | ErrorCategory::Payment)
    }
}
