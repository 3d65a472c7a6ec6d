use chrono::Utc;
use sqlx::SqlitePool;

use crate::dtos::sale::{SaleReceipt, SaleRequest};
use crate::error::AppError;
use crate::models::product::Product;

/// Applies one sale as a single atomic transaction against the ledger.
#[derive(Clone)]
pub struct SaleExecutor {
    pool: SqlitePool,
}

impl SaleExecutor {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Reload stock, verify sufficiency, decrement, append history, commit.
    /// Every failure path rolls the transaction back first, so no partial
    /// sale is ever observable outside of it.
    pub async fn execute(&self, req: SaleRequest) -> Result<SaleReceipt, AppError> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, quantity FROM products WHERE id = ?",
        )
        .bind(req.product_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(product) = product else {
            tx.rollback().await?;
            return Err(AppError::ProductNotFound);
        };

        if product.quantity < req.quantity {
            tx.rollback().await?;
            return Err(AppError::InsufficientStock);
        }

        // The predicate re-checks stock at write time, so a concurrent
        // decrement from another connection shows up as zero rows affected
        // instead of a lost update driving the quantity negative.
        let updated = sqlx::query(
            "UPDATE products SET quantity = quantity - ? WHERE id = ? AND quantity >= ?",
        )
        .bind(req.quantity)
        .bind(req.product_id)
        .bind(req.quantity)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::InsufficientStock);
        }

        let total_price = product.price * req.quantity as f64;
        let sale_date = Utc::now();

        sqlx::query(
            r#"INSERT INTO sales_history (product_id, quantity_sold, unit_price, total_price, sale_date)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(req.product_id)
        .bind(req.quantity)
        .bind(product.price)
        .bind(total_price)
        .bind(sale_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            product_id = req.product_id,
            quantity = req.quantity,
            total_price,
            "Sale committed"
        );

        Ok(SaleReceipt {
            product_id: req.product_id,
            product_name: product.name,
            quantity: req.quantity,
            unit_price: product.price,
            total_price,
            sale_date,
        })
    }
}
