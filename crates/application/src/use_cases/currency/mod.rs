pub mod convert;
pub mod get_rates;

pub use convert::ConvertAmountUseCase;
pub use get_rates::GetRatesUseCase;
