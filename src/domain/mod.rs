//! Domain Layer
//!
//! The restaurant's menu, orders and closing reports, without file handling.
//!
//! ## Structure
//!
//! - `entities/` - Dish, Order, OrderBuilder, ClosingReport
//! - `value_objects/` - Money, OrderNumber, quantity parsing
//! - `services/` - DishRepository, OrderLog, closing report generation
//! - `ports/` - Storage interfaces implemented by infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
