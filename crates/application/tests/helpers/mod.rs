pub mod mock_providers;

pub use mock_providers::{JsonTimeProvider, Script, ScriptedFetch};
