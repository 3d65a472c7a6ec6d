use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use storefront_pos::database;

/// Single-connection in-memory ledger: the one connection keeps the database
/// alive and shared across every query a test runs.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory database");

    database::init_schema(&pool).await.expect("init schema");
    pool
}

pub async fn seed_product(pool: &SqlitePool, id: i64, name: &str, price: f64, quantity: i64) {
    sqlx::query("INSERT INTO products (id, name, price, quantity) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(quantity)
        .execute(pool)
        .await
        .expect("seed product");
}

pub async fn product_quantity(pool: &SqlitePool, id: i64) -> i64 {
    sqlx::query_scalar("SELECT quantity FROM products WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("read product quantity")
}

pub async fn history_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sales_history")
        .fetch_one(pool)
        .await
        .expect("count sale history")
}
