pub mod loader;
pub mod schema;

pub use loader::{API_KEY_ENV, ConfigError, ConfigLoader};
pub use schema::{ClassifierConfig, LanternConfig};
