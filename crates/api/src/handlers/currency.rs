use crate::dto::ErrorResponse;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{error, instrument};

/// `GET /currency/{base}` — single-provider passthrough, no fallback.
#[instrument(skip(state), name = "api_get_rates")]
pub async fn get_rates(State(state): State<AppState>, Path(base): Path<String>) -> Response {
    match state.get_rates.execute(&base).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            error!(%base, error = %e, "Exchange rate fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch exchange rates")),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct ConvertQuery {
    from: String,
    to: String,
    amount: f64,
}

/// `GET /convert?from=&to=&amount=` — passthrough; axum's query rejection
/// answers 400 for missing or malformed parameters.
#[instrument(skip(state, query), name = "api_convert")]
pub async fn convert_amount(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Response {
    match state
        .convert_amount
        .execute(&query.from, &query.to, query.amount)
        .await
    {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            error!(from = %query.from, to = %query.to, error = %e, "Conversion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to convert currency")),
            )
                .into_response()
        }
    }
}
