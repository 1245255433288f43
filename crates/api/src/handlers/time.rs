use crate::dto::{BatchTimesResponse, ErrorResponse, TimeReadingResponse};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use timedesk_domain::ZoneId;
use tracing::{debug, instrument, warn};

/// `GET /time/{*zone}` — the wildcard keeps internal separators, so
/// `America/Argentina/Buenos_Aires` arrives as one zone identifier.
#[instrument(skip(state), name = "api_get_time")]
pub async fn get_time(State(state): State<AppState>, Path(zone): Path<String>) -> Response {
    let zone = match ZoneId::new(zone) {
        Ok(zone) => zone,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response();
        }
    };

    debug!(%zone, "Resolving single zone");
    match state.resolve_zone.execute(&zone).await {
        Ok(reading) => Json(TimeReadingResponse::from(reading)).into_response(),
        Err(e) => {
            warn!(%zone, error = %e, "Zone resolution exhausted all providers");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct TimesQuery {
    zones: Option<String>,
}

/// `GET /times?zones=a,b,c` — comma-separated batch. The parameter must be
/// present (400 otherwise, before any resolution); blank entries are
/// skipped, duplicates resolve independently, output order is input order.
#[instrument(skip(state, query), name = "api_get_times")]
pub async fn get_times(State(state): State<AppState>, Query(query): Query<TimesQuery>) -> Response {
    let Some(raw) = query.zones else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing ?zones= param")),
        )
            .into_response();
    };

    let zones: Vec<ZoneId> = raw
        .split(',')
        .map(str::trim)
        .filter_map(|entry| ZoneId::new(entry).ok())
        .collect();

    debug!(batch_size = zones.len(), "Resolving batch request");
    let outcomes = state.resolve_batch.execute(&zones).await;

    Json(BatchTimesResponse {
        results: outcomes.into_iter().map(Into::into).collect(),
    })
    .into_response()
}
