pub mod time_api_io;
pub mod world_time_api;

pub use time_api_io::TimeApiIo;
pub use world_time_api::WorldTimeApi;

use std::sync::Arc;
use timedesk_application::ports::TimeProvider;

/// The ordered provider set, built once at startup and never mutated.
/// Position is fallback priority: worldtimeapi.org is always tried first,
/// timeapi.io only when it fails. Adding a provider is a code change here,
/// not a runtime operation.
pub fn default_providers() -> Vec<Arc<dyn TimeProvider>> {
    vec![Arc::new(WorldTimeApi::new()), Arc::new(TimeApiIo::new())]
}
