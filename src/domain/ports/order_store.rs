//! OrderStore port - write-only ticket storage for committed orders
//!
//! Tickets are never parsed back into orders. The store only has to answer
//! which order numbers it has seen, so the counter survives restarts.

use std::path::PathBuf;

use super::store_error::StoreResult;
use crate::domain::entities::Order;
use crate::domain::value_objects::OrderNumber;

pub trait OrderStore {
    /// Write the ticket for `order`, returning where it went
    fn save(&self, order: &Order) -> StoreResult<PathBuf>;

    /// Delete the ticket for `number`. Returns false when no ticket matched.
    fn delete(&self, number: OrderNumber) -> StoreResult<bool>;

    /// Delete every ticket, returning how many were removed
    fn delete_all(&self) -> StoreResult<usize>;

    /// Highest order number found among stored tickets
    fn highest_number(&self) -> StoreResult<Option<OrderNumber>>;

    /// Number of stored tickets
    fn count(&self) -> StoreResult<usize>;
}
