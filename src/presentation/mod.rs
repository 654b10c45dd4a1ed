//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring the restaurant with its file stores
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates the restaurant with proper dependencies (dependency injection)
//! - `output` - Text views and NDJSON events
//!
//! ## Usage
//!
//! ```ignore
//! use comanda::presentation::factory;
//!
//! let (mut restaurant, startup) = factory::open_restaurant(&config)?;
//! restaurant.add_dish("P001", "Soup", "2500", "Starter")?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, DishCommand, OrdersCommand};
pub use factory::{open_restaurant, FileRestaurant};
pub use output::OutputFormat;
