// src/state.rs
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::pos::observers::{ProductListing, SalesSummary};
use crate::pos::queue::SaleQueue;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub sale_queue: SaleQueue,
    pub listing: Arc<ProductListing>,
    pub summary: Arc<SalesSummary>,
}
