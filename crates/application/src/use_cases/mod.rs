pub mod currency;
pub mod time;

pub use currency::{ConvertAmountUseCase, GetRatesUseCase};
pub use time::{ResolveBatchUseCase, ResolveZoneUseCase};
