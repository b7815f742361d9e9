//! 认证模块
//!
//! - [`password`] - Argon2 密码哈希
//! - [`cookie`] - `auth-token` 会话 Cookie
//! - [`SessionUser`] - 会话用户提取器

pub mod cookie;
pub mod extractor;
pub mod password;

pub use extractor::SessionUser;
