use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/schedule", get(handlers::get_schedule))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
