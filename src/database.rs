// src/database.rs
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Idempotent DDL for the product ledger and the append-only sale history.
/// The CHECK on quantity backs the never-negative-stock invariant at the
/// storage layer in addition to the executor's own guard.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            price REAL NOT NULL CHECK (price >= 0),
            quantity INTEGER NOT NULL CHECK (quantity >= 0)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS sales_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER NOT NULL REFERENCES products(id),
            quantity_sold INTEGER NOT NULL CHECK (quantity_sold > 0),
            unit_price REAL NOT NULL,
            total_price REAL NOT NULL,
            sale_date TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Seed a handful of products on a fresh database so the terminal is usable
/// out of the box. No-op when any product already exists.
pub async fn seed_demo_products(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    let demo = [
        (1_i64, "Espresso Beans 1kg", 18.50_f64, 40_i64),
        (2, "Ceramic Mug", 9.99, 25),
        (3, "Pour-over Kettle", 34.00, 10),
    ];

    for (id, name, price, quantity) in demo {
        sqlx::query("INSERT INTO products (id, name, price, quantity) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(price)
            .bind(quantity)
            .execute(pool)
            .await?;
    }

    tracing::info!("Seeded demo product catalog");
    Ok(())
}
