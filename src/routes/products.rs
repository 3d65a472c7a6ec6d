use axum::{routing::get, Router};
use crate::handlers::product;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/products", get(product::list_products))
}
