use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One committed sale. Rows are append-only; later product edits never
/// touch history, so unit_price and total_price are frozen at sale time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SaleRecord {
    pub id: i64,
    pub product_id: i64,
    pub quantity_sold: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub sale_date: DateTime<Utc>,
}
