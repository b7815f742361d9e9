//! 服务层
//!
//! - [`paytr`] - PayTR iFrame 令牌生成

pub mod paytr;
