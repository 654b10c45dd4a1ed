//! Comanda - restaurant point-of-sale core
//!
//! Comanda keeps a restaurant's menu, takes numbered customer orders and
//! produces end-of-day closing reports. Every dish, ticket and report is a
//! plain text file, so the data stays readable without the program.
//!
//! ## Layers
//!
//! - `domain` - Dishes, orders, closing reports and the storage ports
//! - `infrastructure` - Text file implementations of the ports
//! - `application` - The `Restaurant` facade used by every front end
//! - `presentation` - CLI definition, wiring and output rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod text;

// Re-exports for convenience
pub use application::{Restaurant, StartupReport};
pub use config::{Config, Verbosity};
pub use domain::entities::{ClosingReport, Dish, DishPatch, Order, OrderBuilder, OrderLine};
pub use domain::value_objects::{Money, OrderNumber};
pub use error::{ComandaError, ComandaResult};
