pub mod currency;
pub mod health;
pub mod time;

pub use currency::{convert_amount, get_rates};
pub use health::health_check;
pub use time::{get_time, get_times};
