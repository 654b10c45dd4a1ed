//! Domain Services
//!
//! Business logic over domain entities. Storage is reached only through the
//! ports in `domain::ports`, so every service runs against in-memory fakes in
//! tests.

mod closing;
mod dish_repository;
#[cfg(test)]
pub(crate) mod fakes;
mod order_log;

pub use closing::{best_category, category_sales, generate_closing, summarize};
pub use dish_repository::{CategoryGroup, DishEdit, DishRepository};
pub use order_log::OrderLog;
