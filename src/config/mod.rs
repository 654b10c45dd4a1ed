//! Configuration module for Comanda
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (COMANDA_*)
//! 3. `--config <file>`, else `./comanda.toml`, else the user config file
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, RestaurantConfig, StorageConfig, Verbosity};
