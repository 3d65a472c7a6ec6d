pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pos;
pub mod routes;
pub mod state;
