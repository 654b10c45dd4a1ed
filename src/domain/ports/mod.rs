//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod dish_store;
pub mod order_store;
pub mod report_writer;
mod store_error;

pub use dish_store::{DishStore, LoadedDishes};
pub use order_store::OrderStore;
pub use report_writer::ReportWriter;
pub use store_error::{SkippedFile, StoreError, StoreResult};
