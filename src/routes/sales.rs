use axum::{routing::get, Router};
use crate::handlers::sale;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(sale::list_sales).post(sale::submit_sale))
        .route("/sales/summary", get(sale::sales_summary))
}
