pub mod health;
pub mod solve;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/solve", post(solve::solve))
        .route("/grid/random", get(solve::random_grid))
}
