//! Dish repository
//!
//! Owns the in-memory menu and keeps each dish's record in the store in step
//! with it. Dishes keep insertion order so the menu prints the way it was built.

use tracing::{info, warn};

use crate::domain::entities::{validate_dish_id, validate_dish_text, Dish, DishPatch, EditWarning};
use crate::domain::ports::{DishStore, SkippedFile};
use crate::domain::value_objects::Money;
use crate::error::{ComandaError, ComandaResult};

/// Result of a successful edit
#[derive(Debug, Clone, PartialEq)]
pub struct DishEdit {
    pub dish: Dish,
    pub warnings: Vec<EditWarning>,
}

/// Dishes sharing a category, in menu order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub dishes: Vec<&'a Dish>,
}

pub struct DishRepository<S: DishStore> {
    dishes: Vec<Dish>,
    store: S,
}

impl<S: DishStore> DishRepository<S> {
    /// Empty repository; nothing is read from `store`
    pub fn new(store: S) -> Self {
        Self {
            dishes: Vec::new(),
            store,
        }
    }

    /// Load every readable dish from `store`. Records that fail to parse are
    /// skipped and returned so the caller can report them.
    pub fn load(store: S) -> ComandaResult<(Self, Vec<SkippedFile>)> {
        let loaded = store.load_all()?;
        let mut repo = Self::new(store);
        for dish in loaded.dishes {
            match repo.position(dish.id()) {
                Some(i) => {
                    warn!(id = dish.id(), "duplicate dish id on disk, keeping the last one read");
                    repo.dishes[i] = dish;
                }
                None => repo.dishes.push(dish),
            }
        }
        info!(count = repo.dishes.len(), skipped = loaded.skipped.len(), "menu loaded");
        Ok((repo, loaded.skipped))
    }

    /// Add a new dish. The record is written before the dish becomes visible.
    pub fn add(&mut self, id: &str, name: &str, price: &str, category: &str) -> ComandaResult<&Dish> {
        validate_dish_id(id)?;
        let (name, category) = (name.trim(), category.trim());
        validate_dish_text("name", name)?;
        validate_dish_text("category", category)?;
        if self.position(id).is_some() {
            return Err(ComandaError::DuplicateId { id: id.to_string() });
        }
        let price = Money::parse(price)?;
        if price.is_negative() {
            warn!(id, %price, "dish added with a negative price");
        }

        let dish = Dish::new(id, name, price, category);
        self.store.save(&dish)?;
        self.dishes.push(dish);
        Ok(&self.dishes[self.dishes.len() - 1])
    }

    pub fn find(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id() == id)
    }

    /// Apply `patch` to an existing dish and rewrite its record
    pub fn edit(&mut self, id: &str, patch: &DishPatch) -> ComandaResult<DishEdit> {
        let index = self
            .position(id)
            .ok_or_else(|| ComandaError::DishNotFound { id: id.to_string() })?;

        let mut updated = self.dishes[index].clone();
        let warnings = updated.apply(patch)?;
        for warning in &warnings {
            warn!(id, "{}", warning);
        }

        self.store.save(&updated)?;
        self.dishes[index] = updated.clone();
        Ok(DishEdit {
            dish: updated,
            warnings,
        })
    }

    /// Remove a dish and its record.
    ///
    /// The dish leaves the menu first. If the record cannot be deleted the
    /// error is returned but the dish stays removed from memory.
    pub fn remove(&mut self, id: &str) -> ComandaResult<Dish> {
        let index = self
            .position(id)
            .ok_or_else(|| ComandaError::DishNotFound { id: id.to_string() })?;
        let dish = self.dishes.remove(index);

        if let Err(e) = self.store.delete(id) {
            warn!(id, error = %e, "dish removed from menu but its record could not be deleted");
            return Err(e.into());
        }
        Ok(dish)
    }

    /// Group dishes by category, categories in first-seen order
    pub fn by_category(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for dish in &self.dishes {
            match groups.iter_mut().find(|g| g.category == dish.category()) {
                Some(group) => group.dishes.push(dish),
                None => groups.push(CategoryGroup {
                    category: dish.category(),
                    dishes: vec![dish],
                }),
            }
        }
        groups
    }

    pub fn all(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.dishes.iter().position(|d| d.id() == id)
    }
}
