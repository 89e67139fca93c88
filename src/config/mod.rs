pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::ProjectConfig;
