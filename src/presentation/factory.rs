//! Restaurant Factory
//!
//! Wires the file-backed stores into a `Restaurant`.
//! This is the dependency injection point for the application.

use crate::application::{Restaurant, StartupReport};
use crate::config::Config;
use crate::error::ComandaResult;
use crate::infrastructure::{StorageLayout, TextDishStore, TextReportWriter, TicketOrderStore};

/// Type alias for the restaurant backed by text files
pub type FileRestaurant = Restaurant<TextDishStore, TicketOrderStore, TextReportWriter>;

/// Create the storage directories, load the menu and recover the order counter
pub fn open_restaurant(config: &Config) -> ComandaResult<(FileRestaurant, StartupReport)> {
    let layout = StorageLayout::from_config(&config.storage);
    layout.ensure_dirs()?;

    Restaurant::open(
        TextDishStore::new(layout.dishes.clone()),
        TicketOrderStore::new(layout.orders.clone()),
        TextReportWriter::new(
            layout.saved_orders.clone(),
            layout.closings.clone(),
            config.restaurant.clone(),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_restaurant_creates_layout() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.storage.root = dir.path().to_path_buf();

        let (restaurant, startup) = open_restaurant(&config).unwrap();

        assert_eq!(startup.dishes_loaded, 0);
        assert_eq!(startup.next_order.unwrap().value(), 1);
        assert!(restaurant.dishes().is_empty());
        assert!(dir.path().join("restaurant/platillos").is_dir());
        assert!(dir.path().join("Cierre de caja").is_dir());
    }
}
