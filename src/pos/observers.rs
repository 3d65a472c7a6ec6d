use async_trait::async_trait;
use serde::Serialize;
use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::product::Product;
use crate::pos::notifier::SaleObserver;

/// Live product listing: a cached snapshot of the catalog, re-read after
/// every committed sale.
pub struct ProductListing {
    pool: SqlitePool,
    rows: RwLock<Vec<Product>>,
}

impl ProductListing {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub async fn snapshot(&self) -> Vec<Product> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl SaleObserver for ProductListing {
    fn name(&self) -> &str {
        "product_listing"
    }

    async fn refresh(&self) -> Result<(), AppError> {
        let rows = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, quantity FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        *self.rows.write().await = rows;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SalesSnapshot {
    pub sale_count: i64,
    pub units_sold: i64,
    pub gross_revenue: f64,
}

/// Live analytics rollup over the sale history.
pub struct SalesSummary {
    pool: SqlitePool,
    snapshot: RwLock<SalesSnapshot>,
}

impl SalesSummary {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            snapshot: RwLock::new(SalesSnapshot::default()),
        }
    }

    pub async fn snapshot(&self) -> SalesSnapshot {
        self.snapshot.read().await.clone()
    }
}

#[async_trait]
impl SaleObserver for SalesSummary {
    fn name(&self) -> &str {
        "sales_summary"
    }

    async fn refresh(&self) -> Result<(), AppError> {
        let (sale_count, units_sold, gross_revenue): (i64, i64, f64) = sqlx::query_as(
            r#"SELECT COUNT(*), COALESCE(SUM(quantity_sold), 0), COALESCE(SUM(total_price), 0.0)
               FROM sales_history"#,
        )
        .fetch_one(&self.pool)
        .await?;

        *self.snapshot.write().await = SalesSnapshot {
            sale_count,
            units_sold,
            gross_revenue,
        };
        Ok(())
    }
}
