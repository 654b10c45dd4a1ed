//! On-disk directory layout

use std::path::PathBuf;

use tracing::debug;

use crate::config::StorageConfig;
use crate::error::{ComandaError, ComandaResult};

use super::fs::ensure_dir;

/// Resolved directories for every kind of record Comanda writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub dishes: PathBuf,
    pub orders: PathBuf,
    pub saved_orders: PathBuf,
    pub closings: PathBuf,
}

impl StorageLayout {
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self {
            dishes: storage.dishes_dir(),
            orders: storage.orders_dir(),
            saved_orders: storage.saved_orders_dir(),
            closings: storage.closings_dir(),
        }
    }

    /// Create all directories; safe to call on every startup
    pub fn ensure_dirs(&self) -> ComandaResult<()> {
        for dir in [&self.dishes, &self.orders, &self.saved_orders, &self.closings] {
            ensure_dir(dir).map_err(|e| ComandaError::persistence(dir.as_path(), e))?;
            debug!(dir = %dir.display(), "directory ready");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn layout_resolves_against_root() {
        let storage = StorageConfig {
            root: PathBuf::from("/srv/pos"),
            ..StorageConfig::default()
        };
        let layout = StorageLayout::from_config(&storage);

        assert_eq!(layout.dishes, PathBuf::from("/srv/pos/restaurant/platillos"));
        assert_eq!(layout.closings, PathBuf::from("/srv/pos/Cierre de caja"));
    }

    #[test]
    fn ensure_dirs_twice_succeeds() {
        let dir = tempdir().unwrap();
        let storage = StorageConfig {
            root: dir.path().to_path_buf(),
            ..StorageConfig::default()
        };
        let layout = StorageLayout::from_config(&storage);

        layout.ensure_dirs().unwrap();
        layout.ensure_dirs().unwrap();

        assert!(layout.dishes.is_dir());
        assert!(layout.orders.is_dir());
        assert!(layout.saved_orders.is_dir());
        assert!(layout.closings.is_dir());
    }

    #[test]
    fn ensure_dirs_reports_blocking_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("restaurant"), "not a dir").unwrap();
        let storage = StorageConfig {
            root: dir.path().to_path_buf(),
            ..StorageConfig::default()
        };

        let err = StorageLayout::from_config(&storage).ensure_dirs().unwrap_err();
        assert!(matches!(err, ComandaError::Persistence { .. }));
    }
}
