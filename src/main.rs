// src/main.rs
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{routing::get, Router};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::fmt::init as tracing_init;

use storefront_pos::database;
use storefront_pos::pos::executor::SaleExecutor;
use storefront_pos::pos::notifier::{SaleObserver, ViewNotifier};
use storefront_pos::pos::observers::{ProductListing, SalesSummary};
use storefront_pos::pos::queue::SaleQueue;
use storefront_pos::routes;
use storefront_pos::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Embedded per-terminal ledger
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://storefront.db".to_string());
    let db_pool = database::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");
    database::init_schema(&db_pool)
        .await
        .expect("Failed to initialize schema");
    database::seed_demo_products(&db_pool)
        .await
        .expect("Failed to seed product catalog");

    // Live views, primed once so the first read is already populated; after
    // that they refresh on every committed sale.
    let listing = Arc::new(ProductListing::new(db_pool.clone()));
    let summary = Arc::new(SalesSummary::new(db_pool.clone()));
    listing.refresh().await.expect("Failed to load product listing");
    summary.refresh().await.expect("Failed to load sales summary");

    let notifier = ViewNotifier::new();
    notifier.register(listing.clone()).await;
    notifier.register(summary.clone()).await;

    let sale_queue = SaleQueue::new(SaleExecutor::new(db_pool.clone()), notifier);

    let app_state = AppState {
        db_pool,
        sale_queue: sale_queue.clone(),
        listing,
        summary,
    };

    // Build application under /pos base path
    let api = routes::create_router()
        .route("/", get(|| async { "Storefront POS" }))
        .route("/health", get(health_check));

    let app = Router::new()
        .nest("/pos", api)
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server with HOST/PORT env and graceful port selection
    let host_str = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let host: IpAddr = host_str.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let base_port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    // Try base_port..base_port+20 to avoid crashing when the address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = base_port.saturating_add(offset);
            let addr = SocketAddr::from((host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error = %e, "Port in use, trying next");
                    }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Terminal running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", base_port, host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    // Finish queued sales before exit; further submissions get QueueClosed.
    sale_queue.shutdown().await;
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown requested, draining sale queue");
}

async fn health_check() -> &'static str {
    "OK"
}
