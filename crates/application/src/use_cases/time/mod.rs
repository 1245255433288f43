pub mod resolve_batch;
pub mod resolve_zone;

pub use resolve_batch::ResolveBatchUseCase;
pub use resolve_zone::ResolveZoneUseCase;
