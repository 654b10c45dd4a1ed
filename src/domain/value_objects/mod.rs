//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod money;
mod order_number;
mod quantity;

pub use money::Money;
pub use order_number::OrderNumber;
pub use quantity::parse_quantity;
