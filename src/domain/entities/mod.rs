//! Domain Entities
//!
//! - `Dish` - A menu item
//! - `Order` / `OrderBuilder` - A customer order and its in-progress form
//! - `ClosingReport` - End-of-day aggregate over the order log

mod closing_report;
mod dish;
mod order;

pub use closing_report::{CategorySales, ClosingReport, SalesSummary};
pub use dish::{validate_dish_id, validate_dish_text, Dish, DishPatch, EditWarning};
pub use order::{Order, OrderBuilder, OrderLine};
