//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Restaurant` - Menu, order log and closing report behind one facade

mod restaurant;

pub use restaurant::{Restaurant, StartupReport};
