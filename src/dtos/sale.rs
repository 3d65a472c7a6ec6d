use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw terminal input. Both fields arrive as text exactly as typed; the
/// validator is the only place that parses them.
#[derive(Debug, Deserialize)]
pub struct SubmitSaleRequest {
    pub product_id: String,
    pub quantity: String,
}

/// A sale request that passed validation. Owned by the queue from submission
/// until its outcome is delivered back to the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleRequest {
    pub product_id: i64,
    pub quantity: i64,
}

/// Receipt for a committed sale, produced only after the transaction commits.
#[derive(Debug, Clone, Serialize)]
pub struct SaleReceipt {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub sale_date: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize)]
pub struct SaleHistoryItem {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity_sold: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub sale_date: DateTime<Utc>,
}
