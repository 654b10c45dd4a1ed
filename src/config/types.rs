//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ComandaResult;

use super::loader::{self, ConfigWarning};

/// Where records and reports live
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Base directory for the relative paths below
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default = "default_dishes_dir")]
    pub dishes: PathBuf,

    #[serde(default = "default_orders_dir")]
    pub orders: PathBuf,

    /// Full order listings, one subdirectory per day
    #[serde(default = "default_saved_orders_dir")]
    pub saved_orders: PathBuf,

    /// Closing reports, one subdirectory per day
    #[serde(default = "default_closings_dir")]
    pub closings: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            dishes: default_dishes_dir(),
            orders: default_orders_dir(),
            saved_orders: default_saved_orders_dir(),
            closings: default_closings_dir(),
        }
    }
}

impl StorageConfig {
    pub fn dishes_dir(&self) -> PathBuf {
        self.root.join(&self.dishes)
    }

    pub fn orders_dir(&self) -> PathBuf {
        self.root.join(&self.orders)
    }

    pub fn saved_orders_dir(&self) -> PathBuf {
        self.root.join(&self.saved_orders)
    }

    pub fn closings_dir(&self) -> PathBuf {
        self.root.join(&self.closings)
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_dishes_dir() -> PathBuf {
    PathBuf::from("restaurant/platillos")
}

fn default_orders_dir() -> PathBuf {
    PathBuf::from("restaurant/ordenes")
}

fn default_saved_orders_dir() -> PathBuf {
    PathBuf::from("Ordenes Guardadas")
}

fn default_closings_dir() -> PathBuf {
    PathBuf::from("Cierre de caja")
}

/// Restaurant identity printed on reports and the menu banner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantConfig {
    #[serde(default = "default_restaurant_name")]
    pub name: String,

    #[serde(default)]
    pub tagline: String,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: default_restaurant_name(),
            tagline: String::new(),
        }
    }
}

fn default_restaurant_name() -> String {
    "Restaurant".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the level by `steps` (one per `-v` flag)
    pub fn raised(self, steps: u8) -> Self {
        let level = match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
            Verbosity::Debug => 3,
        };
        match level + u16::from(steps) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub restaurant: RestaurantConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ComandaResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ComandaResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve configuration from an explicit file, the working directory,
    /// the user config directory, or defaults, then apply env overrides.
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> ComandaResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (COMANDA_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
