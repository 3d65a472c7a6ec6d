use axum::{extract::State, http::StatusCode, Json};

use crate::dtos::sale::{SaleHistoryItem, SaleReceipt, SubmitSaleRequest};
use crate::error::AppError;
use crate::pos::observers::SalesSnapshot;
use crate::pos::validator::validate_sale;
use crate::state::AppState;

pub async fn submit_sale(
    State(state): State<AppState>,
    Json(req): Json<SubmitSaleRequest>,
) -> Result<(StatusCode, Json<SaleReceipt>), AppError> {
    // Malformed input is rejected here, before it ever reaches the queue.
    let request = validate_sale(&req.product_id, &req.quantity)?;

    let handle = state.sale_queue.submit(request).await?;
    let receipt = handle.await_outcome().await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

pub async fn list_sales(
    State(state): State<AppState>,
) -> Result<Json<Vec<SaleHistoryItem>>, AppError> {
    let sales = sqlx::query_as::<_, SaleHistoryItem>(
        r#"SELECT s.id, s.product_id, p.name AS product_name, s.quantity_sold,
                  s.unit_price, s.total_price, s.sale_date
           FROM sales_history s
           JOIN products p ON p.id = s.product_id
           ORDER BY s.id DESC
           LIMIT 100"#,
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(sales))
}

pub async fn sales_summary(State(state): State<AppState>) -> Json<SalesSnapshot> {
    Json(state.summary.snapshot().await)
}
