//! Configuration system — project file, environment, CLI flags.

pub mod loader;
pub mod schema;

// Re-export the most commonly used items.
pub use loader::{load_config, load_project_config, ConfigOverrides, PROJECT_CONFIG_FILE};
pub use schema::HookctlConfig;
