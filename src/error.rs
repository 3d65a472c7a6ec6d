// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Product id or quantity field was left empty.
    MissingField,
    /// Product id or quantity did not parse as an integer.
    NotNumeric,
    /// Quantity parsed but was zero or negative.
    NonPositiveQuantity,
    /// No product row with the requested id.
    ProductNotFound,
    /// Stock on hand is lower than the requested quantity.
    InsufficientStock,
    /// Underlying storage failure; the transaction was rolled back.
    Database(sqlx::Error),
    /// The sale queue has begun shutdown and accepts no new work.
    QueueClosed,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingField => write!(f, "Please fill in all fields"),
            AppError::NotNumeric => write!(f, "Product ID and quantity must be numeric"),
            AppError::NonPositiveQuantity => write!(f, "Quantity must be greater than 0"),
            AppError::ProductNotFound => write!(f, "Product not found"),
            AppError::InsufficientStock => write!(f, "Not enough stock available"),
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::QueueClosed => write!(f, "Sale queue is closed"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingField
            | AppError::NotNumeric
            | AppError::NonPositiveQuantity => StatusCode::BAD_REQUEST,
            AppError::ProductNotFound => StatusCode::NOT_FOUND,
            AppError::InsufficientStock => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::QueueClosed => StatusCode::SERVICE_UNAVAILABLE,
        };

        // Keep driver details out of the response body.
        let message = match &self {
            AppError::Database(_) => "Database error occurred".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
