use axum::{extract::State, Json};

use crate::models::product::Product;
use crate::state::AppState;

/// Served from the live listing cache rather than the ledger; the cache is
/// primed at startup and refreshed after every committed sale.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.listing.snapshot().await)
}
