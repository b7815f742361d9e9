//! User Repository

use super::{RepoError, RepoResult};
use shared::models::{User, UserCreate, UserRole};
use sqlx::SqlitePool;

use crate::auth::password;

const COLUMNS: &str = "id, username, display_name, role, created_at";

/// Minimum password length accepted on registration
const MIN_PASSWORD_LEN: usize = 6;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let sql = format!("SELECT {COLUMNS} FROM app_user ORDER BY id");
    let users = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
    Ok(users)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("SELECT {COLUMNS} FROM app_user WHERE id = ?");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Look up a user and the stored argon2 hash for login
pub async fn find_credentials(
    pool: &SqlitePool,
    username: &str,
) -> RepoResult<Option<(User, String)>> {
    let row: Option<(i64, String, String, UserRole, String, String)> = sqlx::query_as(
        "SELECT id, username, display_name, role, created_at, password_hash \
         FROM app_user WHERE username = ? LIMIT 1",
    )
    .bind(username.trim())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(
        |(id, username, display_name, role, created_at, password_hash)| {
            (
                User {
                    id,
                    username,
                    display_name,
                    role,
                    created_at,
                },
                password_hash,
            )
        },
    ))
}

pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    let username = data.username.trim();
    if username.is_empty() {
        return Err(RepoError::Validation("Kullanıcı adı boş olamaz".into()));
    }
    if data.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RepoError::Validation(format!(
            "Şifre en az {MIN_PASSWORD_LEN} karakter olmalı"
        )));
    }

    let password_hash = password::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;
    let display_name = data
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(username);

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO app_user (username, display_name, password_hash, role) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(username)
    .bind(display_name)
    .bind(&password_hash)
    .bind(data.role.unwrap_or_default())
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Kullanıcı adı zaten kullanımda: {username}"))
        }
        other => other,
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

/// Delete a user; their sessions go with them (ON DELETE CASCADE)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM app_user WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
