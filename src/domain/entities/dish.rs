//! Dish entity
//!
//! A menu item. The identifier is chosen by the caller, doubles as the dish's
//! filename, and never changes after creation.

use serde::Serialize;

use crate::domain::value_objects::Money;
use crate::error::{ComandaError, ComandaResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dish {
    id: String,
    name: String,
    price: Money,
    category: String,
    available: bool,
}

impl Dish {
    /// New dishes are always available
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            available: true,
        }
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Apply a partial edit. Blank fields are ignored. A price that does not parse
    /// leaves the current price untouched and is reported back as a warning.
    ///
    /// A name or category that cannot be stored on one line rejects the whole
    /// edit and leaves the dish unchanged.
    pub fn apply(&mut self, patch: &DishPatch) -> ComandaResult<Vec<EditWarning>> {
        if let Some(name) = non_blank(&patch.name) {
            validate_dish_text("name", name)?;
        }
        if let Some(category) = non_blank(&patch.category) {
            validate_dish_text("category", category)?;
        }

        let mut warnings = Vec::new();

        if let Some(name) = non_blank(&patch.name) {
            self.name = name.to_string();
        }
        if let Some(price) = non_blank(&patch.price) {
            match Money::parse(price) {
                Ok(parsed) => self.price = parsed,
                Err(_) => warnings.push(EditWarning::PriceKept {
                    input: price.to_string(),
                }),
            }
        }
        if let Some(category) = non_blank(&patch.category) {
            self.category = category.to_string();
        }
        if let Some(available) = patch.available {
            self.available = available;
        }

        Ok(warnings)
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Reject identifiers that cannot safely become a filename
pub fn validate_dish_id(id: &str) -> ComandaResult<()> {
    if id.trim().is_empty() {
        return Err(ComandaError::invalid("id", "must not be empty"));
    }
    if id != id.trim() {
        return Err(ComandaError::invalid("id", "must not start or end with spaces"));
    }
    if id == "." || id == ".." || id.contains(['/', '\\']) || id.chars().any(char::is_control) {
        return Err(ComandaError::invalid(
            "id",
            format!("'{}' cannot be used as a file name", id),
        ));
    }
    Ok(())
}

/// Reject names and categories that would break the one-value-per-line record
pub fn validate_dish_text(field: &'static str, value: &str) -> ComandaResult<()> {
    if value.chars().any(char::is_control) {
        return Err(ComandaError::invalid(
            field,
            "must be a single line without control characters",
        ));
    }
    Ok(())
}

/// Partial update for a dish; `None` and blank strings keep the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishPatch {
    pub name: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

impl DishPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn is_empty(&self) -> bool {
        non_blank(&self.name).is_none()
            && non_blank(&self.price).is_none()
            && non_blank(&self.category).is_none()
            && self.available.is_none()
    }
}

/// Soft problem found while editing; the edit still succeeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditWarning {
    /// Price input did not parse, previous price kept
    PriceKept { input: String },
}

impl std::fmt::Display for EditWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditWarning::PriceKept { input } => {
                write!(f, "invalid price '{}', previous price kept", input)
            }
        }
    }
}
