use axum::Router;
use timedesk_api::{create_api_routes, AppState};
use tower_http::cors::CorsLayer;

/// Assembles the application router. The API sits under `/api`; CORS is
/// permissive because the browser UI is served from a different origin.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .layer(CorsLayer::permissive())
}
