use std::sync::Arc;
use timedesk_api::AppState;
use timedesk_application::ports::{HttpFetch, RateSource};
use timedesk_application::use_cases::{
    ConvertAmountUseCase, GetRatesUseCase, ResolveBatchUseCase, ResolveZoneUseCase,
};
use timedesk_infrastructure::{default_providers, ExchangeRateHost, ReqwestFetcher};
use tracing::info;

/// Wires the production adapters into the use cases. The provider set is
/// built once here and shared read-only across all requests.
pub fn build_state() -> AppState {
    let fetcher: Arc<dyn HttpFetch> = Arc::new(ReqwestFetcher::new());
    let providers = default_providers();

    info!(providers = providers.len(), "Time providers configured");

    let resolve_zone = Arc::new(ResolveZoneUseCase::new(providers, Arc::clone(&fetcher)));
    let rates: Arc<dyn RateSource> = Arc::new(ExchangeRateHost::new(fetcher));

    AppState {
        resolve_batch: Arc::new(ResolveBatchUseCase::new(Arc::clone(&resolve_zone))),
        resolve_zone,
        get_rates: Arc::new(GetRatesUseCase::new(Arc::clone(&rates))),
        convert_amount: Arc::new(ConvertAmountUseCase::new(rates)),
    }
}
