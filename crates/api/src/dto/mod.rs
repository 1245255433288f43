pub mod error;
pub mod time;

pub use error::ErrorResponse;
pub use time::{BatchTimesResponse, TimeReadingResponse, ZoneOutcomeResponse};
