//! Order Repository

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderCreate, OrderItem, OrderStatus};
use sqlx::SqlitePool;

const ORDER_COLUMNS: &str = "id, customer_name, customer_phone, delivery_address, note, status, total, created_at";
const ITEM_COLUMNS: &str = "id, order_id, menu_item_id, name, unit_price, quantity";

/// Upper bound for a single line, keeps totals sane
const MAX_QUANTITY: i64 = 99;

/// All orders, newest first, with their lines
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let sql = format!("SELECT {ORDER_COLUMNS} FROM customer_order ORDER BY id DESC");
    let mut orders = sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?;

    let sql = format!("SELECT {ITEM_COLUMNS} FROM order_item ORDER BY order_id, id");
    let items = sqlx::query_as::<_, OrderItem>(&sql).fetch_all(pool).await?;

    for item in items {
        if let Some(order) = orders.iter_mut().find(|o| o.id == item.order_id) {
            order.items.push(item);
        }
    }
    Ok(orders)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("SELECT {ORDER_COLUMNS} FROM customer_order WHERE id = ?");
    let Some(mut order) = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
    else {
        return Ok(None);
    };

    let sql = format!("SELECT {ITEM_COLUMNS} FROM order_item WHERE order_id = ? ORDER BY id");
    order.items = sqlx::query_as::<_, OrderItem>(&sql)
        .bind(id)
        .fetch_all(pool)
        .await?;
    Ok(Some(order))
}

/// Create an order in one transaction
///
/// Line names and prices are copied from the current menu; the total is the
/// sum of `unit_price * quantity`. An unknown or unavailable menu item
/// aborts the whole order.
pub async fn create(pool: &SqlitePool, data: OrderCreate) -> RepoResult<Order> {
    validate(&data)?;

    let mut tx = pool.begin().await?;

    let order_id: i64 = sqlx::query_scalar(
        "INSERT INTO customer_order (customer_name, customer_phone, delivery_address, note, status) \
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.customer_name.trim())
    .bind(data.customer_phone.trim())
    .bind(data.delivery_address.trim())
    .bind(&data.note)
    .bind(OrderStatus::Pending)
    .fetch_one(&mut *tx)
    .await?;

    let mut total = 0.0;
    for line in &data.items {
        let menu_item: Option<(String, f64, bool)> =
            sqlx::query_as("SELECT name, price, is_available FROM menu_item WHERE id = ?")
                .bind(line.menu_item_id)
                .fetch_optional(&mut *tx)
                .await?;

        let (name, price) = match menu_item {
            Some((name, price, true)) => (name, price),
            Some((name, _, false)) => {
                return Err(RepoError::Validation(format!(
                    "{name} şu anda satışta değil"
                )));
            }
            None => {
                return Err(RepoError::Validation(format!(
                    "Menüde bulunmayan ürün: {}",
                    line.menu_item_id
                )));
            }
        };

        sqlx::query(
            "INSERT INTO order_item (order_id, menu_item_id, name, unit_price, quantity) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(line.menu_item_id)
        .bind(&name)
        .bind(price)
        .bind(line.quantity)
        .execute(&mut *tx)
        .await?;

        total += price * line.quantity as f64;
    }

    sqlx::query("UPDATE customer_order SET total = ? WHERE id = ?")
        .bind(round_currency(total))
        .bind(order_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

pub async fn update_status(pool: &SqlitePool, id: i64, status: OrderStatus) -> RepoResult<Order> {
    let rows = sqlx::query("UPDATE customer_order SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Delete an order; lines go with it (ON DELETE CASCADE)
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM customer_order WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

fn validate(data: &OrderCreate) -> RepoResult<()> {
    if data.customer_name.trim().is_empty() {
        return Err(RepoError::Validation("Müşteri adı gerekli".into()));
    }
    if data.customer_phone.trim().is_empty() {
        return Err(RepoError::Validation("Telefon numarası gerekli".into()));
    }
    if data.delivery_address.trim().is_empty() {
        return Err(RepoError::Validation("Teslimat adresi gerekli".into()));
    }
    if data.items.is_empty() {
        return Err(RepoError::Validation("Sipariş en az bir ürün içermeli".into()));
    }
    if let Some(line) = data
        .items
        .iter()
        .find(|l| l.quantity < 1 || l.quantity > MAX_QUANTITY)
    {
        return Err(RepoError::Validation(format!(
            "Geçersiz adet: {} (1-{MAX_QUANTITY})",
            line.quantity
        )));
    }
    Ok(())
}

/// Round to kuruş
fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
