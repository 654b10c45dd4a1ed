//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs` - Atomic writes and directory helpers
//! - `layout` - Directory layout resolved from `StorageConfig`
//! - `repositories/` - Text file stores for dishes, tickets and reports

pub mod fs;
pub mod layout;
pub mod repositories;

pub use layout::StorageLayout;
pub use repositories::{TextDishStore, TextReportWriter, TicketOrderStore};
