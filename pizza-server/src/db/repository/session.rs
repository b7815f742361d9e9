//! Session Repository
//!
//! A session is an opaque token bound to a user. No expiry is tracked.

use super::RepoResult;
use shared::models::User;
use sqlx::SqlitePool;

/// Create a session for `user_id`, returning the new token
pub async fn create(pool: &SqlitePool, user_id: i64) -> RepoResult<String> {
    let token = uuid::Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO session (token, user_id) VALUES (?, ?)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Resolve a token to its user
pub async fn find_user(pool: &SqlitePool, token: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT u.id, u.username, u.display_name, u.role, u.created_at \
         FROM session s JOIN app_user u ON u.id = s.user_id \
         WHERE s.token = ?",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Remove a session; returns whether one existed
pub async fn delete(pool: &SqlitePool, token: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM session WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
