mod common;

use storefront_pos::dtos::sale::SaleRequest;
use storefront_pos::error::AppError;
use storefront_pos::models::sale::SaleRecord;
use storefront_pos::pos::executor::SaleExecutor;
use storefront_pos::pos::validator::validate_sale;

use common::{history_count, product_quantity, seed_product, setup_pool};

#[tokio::test]
async fn sale_decrements_stock_and_appends_history() {
    let pool = setup_pool().await;
    seed_product(&pool, 1, "Ceramic Mug", 9.99, 5).await;

    let executor = SaleExecutor::new(pool.clone());
    let receipt = executor
        .execute(SaleRequest { product_id: 1, quantity: 3 })
        .await
        .expect("sale should succeed");

    assert_eq!(receipt.product_name, "Ceramic Mug");
    assert_eq!(receipt.quantity, 3);
    assert_eq!(receipt.unit_price, 9.99);
    assert_eq!(receipt.total_price, 9.99 * 3.0);
    assert!((receipt.total_price - 29.97).abs() < 1e-9);

    assert_eq!(product_quantity(&pool, 1).await, 2);
    assert_eq!(history_count(&pool).await, 1);

    // The history row freezes quantity, unit price and total at sale time.
    let record = sqlx::query_as::<_, SaleRecord>(
        "SELECT id, product_id, quantity_sold, unit_price, total_price, sale_date FROM sales_history WHERE product_id = 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(record.quantity_sold, 3);
    assert_eq!(record.unit_price, 9.99);
    assert_eq!(record.total_price, receipt.total_price);
}

#[tokio::test]
async fn insufficient_stock_leaves_ledger_untouched() {
    let pool = setup_pool().await;
    seed_product(&pool, 1, "Ceramic Mug", 9.99, 5).await;

    let executor = SaleExecutor::new(pool.clone());
    let outcome = executor
        .execute(SaleRequest { product_id: 1, quantity: 10 })
        .await;

    assert!(matches!(outcome, Err(AppError::InsufficientStock)));
    assert_eq!(product_quantity(&pool, 1).await, 5);
    assert_eq!(history_count(&pool).await, 0);
}

#[tokio::test]
async fn unknown_product_is_rejected_cleanly() {
    let pool = setup_pool().await;

    let executor = SaleExecutor::new(pool.clone());
    let outcome = executor
        .execute(SaleRequest { product_id: 99, quantity: 1 })
        .await;

    assert!(matches!(outcome, Err(AppError::ProductNotFound)));
    assert_eq!(history_count(&pool).await, 0);
}

#[tokio::test]
async fn exact_fit_drains_stock_to_zero_then_rejects() {
    let pool = setup_pool().await;
    seed_product(&pool, 1, "Pour-over Kettle", 34.0, 4).await;

    let executor = SaleExecutor::new(pool.clone());
    for _ in 0..2 {
        executor
            .execute(SaleRequest { product_id: 1, quantity: 2 })
            .await
            .expect("stock still covers this sale");
    }

    assert_eq!(product_quantity(&pool, 1).await, 0);

    let outcome = executor
        .execute(SaleRequest { product_id: 1, quantity: 1 })
        .await;
    assert!(matches!(outcome, Err(AppError::InsufficientStock)));
    assert_eq!(product_quantity(&pool, 1).await, 0);
    assert_eq!(history_count(&pool).await, 2);
}

#[tokio::test]
async fn sale_round_trips_against_recorded_history() {
    let pool = setup_pool().await;
    seed_product(&pool, 7, "Espresso Beans 1kg", 18.5, 12).await;

    let executor = SaleExecutor::new(pool.clone());
    let receipt = executor
        .execute(SaleRequest { product_id: 7, quantity: 5 })
        .await
        .unwrap();

    let recorded: i64 =
        sqlx::query_scalar("SELECT SUM(quantity_sold) FROM sales_history WHERE product_id = 7")
            .fetch_one(&pool)
            .await
            .unwrap();

    // Remaining stock plus recorded sales equals the seeded quantity.
    assert_eq!(product_quantity(&pool, 7).await + recorded, 12);
    assert_eq!(recorded, receipt.quantity);
}

#[test]
fn non_positive_quantity_never_reaches_storage() {
    // Validation is pure: no pool, no queue, nothing to roll back.
    assert!(matches!(
        validate_sale("1", "-2"),
        Err(AppError::NonPositiveQuantity)
    ));
    assert!(matches!(validate_sale("1", "0"), Err(AppError::NonPositiveQuantity)));
    assert!(matches!(validate_sale("", "3"), Err(AppError::MissingField)));
    assert!(matches!(validate_sale("x", "3"), Err(AppError::NotNumeric)));
}
