use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state. One consistent contract serves every
/// zone path via the wildcard route.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/time/{*zone}", get(handlers::get_time))
        .route("/times", get(handlers::get_times))
        .route("/currency/{base}", get(handlers::get_rates))
        .route("/convert", get(handlers::convert_amount))
        .with_state(state)
}
