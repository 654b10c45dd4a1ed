//! DishStore port - durable storage for menu dishes

use super::store_error::{SkippedFile, StoreResult};
use crate::domain::entities::Dish;

/// Everything a store could read back at startup
#[derive(Debug, Clone, Default)]
pub struct LoadedDishes {
    pub dishes: Vec<Dish>,
    pub skipped: Vec<SkippedFile>,
}

/// One record per dish, keyed by dish id.
///
/// Implementations:
/// - `TextDishStore` - five-line text file per dish
pub trait DishStore {
    /// Read every stored dish. Unreadable records are reported in `skipped`,
    /// not as an error.
    fn load_all(&self) -> StoreResult<LoadedDishes>;

    /// Create or overwrite the record for `dish`
    fn save(&self, dish: &Dish) -> StoreResult<()>;

    /// Delete the record for `id`
    fn delete(&self, id: &str) -> StoreResult<()>;
}
