use std::sync::Arc;
use timedesk_application::use_cases::{
    ConvertAmountUseCase, GetRatesUseCase, ResolveBatchUseCase, ResolveZoneUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub resolve_zone: Arc<ResolveZoneUseCase>,
    pub resolve_batch: Arc<ResolveBatchUseCase>,
    pub get_rates: Arc<GetRatesUseCase>,
    pub convert_amount: Arc<ConvertAmountUseCase>,
}
