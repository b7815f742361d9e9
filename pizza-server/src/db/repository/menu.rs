//! Menu Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate, MenuQuery};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, name, description, price, category, image_url, is_available, created_at";

/// All menu items, ordered by category then name
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    find_filtered(pool, &MenuQuery::default()).await
}

/// Menu items narrowed by category and/or availability
pub async fn find_filtered(pool: &SqlitePool, query: &MenuQuery) -> RepoResult<Vec<MenuItem>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM menu_item \
         WHERE (?1 IS NULL OR category = ?1) AND (?2 IS NULL OR is_available = ?2) \
         ORDER BY category, name"
    );
    let items = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(query.category.as_deref())
        .bind(query.available)
        .fetch_all(pool)
        .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("SELECT {COLUMNS} FROM menu_item WHERE id = ?");
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<MenuItem> {
    validate_name(&data.name)?;
    validate_category(&data.category)?;
    validate_price(data.price)?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO menu_item (name, description, price, category, image_url, is_available) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.name.trim())
    .bind(&data.description)
    .bind(data.price)
    .bind(data.category.trim())
    .bind(&data.image_url)
    .bind(data.is_available.unwrap_or(true))
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemUpdate) -> RepoResult<MenuItem> {
    if let Some(name) = &data.name {
        validate_name(name)?;
    }
    if let Some(category) = &data.category {
        validate_category(category)?;
    }
    if let Some(price) = data.price {
        validate_price(price)?;
    }

    let rows = sqlx::query(
        "UPDATE menu_item SET \
            name = COALESCE(?1, name), \
            description = CASE WHEN ?2 THEN ?3 ELSE description END, \
            price = COALESCE(?4, price), \
            category = COALESCE(?5, category), \
            image_url = CASE WHEN ?6 THEN ?7 ELSE image_url END, \
            is_available = COALESCE(?8, is_available) \
         WHERE id = ?9",
    )
    .bind(data.name.as_deref().map(str::trim))
    .bind(data.description.is_some())
    .bind(data.description.flatten())
    .bind(data.price)
    .bind(data.category.as_deref().map(str::trim))
    .bind(data.image_url.is_some())
    .bind(data.image_url.flatten())
    .bind(data.is_available)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

/// Hard delete; past order lines keep their copied name and price
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

fn validate_name(name: &str) -> RepoResult<()> {
    if name.trim().is_empty() {
        return Err(RepoError::Validation("Ürün adı boş olamaz".into()));
    }
    Ok(())
}

fn validate_category(category: &str) -> RepoResult<()> {
    if category.trim().is_empty() {
        return Err(RepoError::Validation("Kategori boş olamaz".into()));
    }
    Ok(())
}

fn validate_price(price: f64) -> RepoResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(RepoError::Validation("Fiyat negatif olamaz".into()));
    }
    Ok(())
}
