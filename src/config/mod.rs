//! Configuration: TOML file under the user config dir, every field defaulted.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, LoadOrdering, SyncConfig, UiConfig};
