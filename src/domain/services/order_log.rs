//! Order log
//!
//! Committed orders for the current session, in creation order, plus the
//! counter that hands out order numbers. Tickets from earlier sessions stay on
//! disk but are not read back; only their numbers are, so the counter never
//! goes backwards across a restart.

use tracing::{debug, info, warn};

use crate::domain::entities::{Order, OrderBuilder};
use crate::domain::ports::OrderStore;
use crate::domain::value_objects::OrderNumber;
use crate::error::{ComandaError, ComandaResult};

pub struct OrderLog<S: OrderStore> {
    orders: Vec<Order>,
    /// `None` once the highest possible number has been handed out
    next_number: Option<OrderNumber>,
    store: S,
}

impl<S: OrderStore> OrderLog<S> {
    /// Empty log starting at order 1; nothing is read from `store`
    pub fn new(store: S) -> Self {
        Self {
            orders: Vec::new(),
            next_number: Some(OrderNumber::FIRST),
            store,
        }
    }

    /// Start an empty log whose counter continues after the highest stored ticket
    pub fn recover(store: S) -> ComandaResult<Self> {
        let next_number = match store.highest_number()? {
            Some(highest) => {
                let next = highest.next();
                if next.is_none() {
                    warn!(highest = %highest, "no order numbers left after the stored tickets");
                }
                next
            }
            None => Some(OrderNumber::FIRST),
        };
        info!(next = ?next_number.map(|n| n.value()), "order counter recovered");
        Ok(Self {
            orders: Vec::new(),
            next_number,
            store,
        })
    }

    /// Start building an order for `customer`
    pub fn begin_order(&self, customer: &str) -> ComandaResult<OrderBuilder> {
        OrderBuilder::new(customer)
    }

    /// Number the builder's order, write its ticket and append it.
    ///
    /// An empty builder is rejected before a number is used. If the ticket
    /// cannot be written the order is not appended and its number is reused.
    /// Once the last number has been used every commit fails until `clear_all`.
    pub fn commit(&mut self, builder: OrderBuilder) -> ComandaResult<&Order> {
        let number = self.next_number.ok_or(ComandaError::OrderNumbersExhausted)?;
        let order = builder.finalize(number)?;
        let path = self.store.save(&order)?;
        debug!(number = %order.number(), path = %path.display(), "ticket written");

        self.next_number = number.next();
        self.orders.push(order);
        Ok(&self.orders[self.orders.len() - 1])
    }

    pub fn find(&self, number: OrderNumber) -> Option<&Order> {
        self.orders.iter().find(|o| o.number() == number)
    }

    /// Remove an order of this session and delete its ticket.
    ///
    /// The counter is untouched, so the number is never handed out again.
    /// A failed ticket delete is returned after the order has left the log.
    pub fn remove(&mut self, number: OrderNumber) -> ComandaResult<Order> {
        let index = self
            .orders
            .iter()
            .position(|o| o.number() == number)
            .ok_or(ComandaError::OrderNotFound {
                number: number.value(),
            })?;
        let order = self.orders.remove(index);

        match self.store.delete(number) {
            Ok(true) => Ok(order),
            Ok(false) => {
                warn!(number = %number, "order removed but no ticket file matched");
                Ok(order)
            }
            Err(e) => {
                warn!(number = %number, error = %e, "order removed but its ticket could not be deleted");
                Err(e.into())
            }
        }
    }

    /// Delete every ticket, empty the log and restart numbering at 1
    pub fn clear_all(&mut self) -> ComandaResult<usize> {
        let deleted = self.store.delete_all()?;
        self.orders.clear();
        self.next_number = Some(OrderNumber::FIRST);
        info!(deleted, "order log cleared, counter reset to 1");
        Ok(deleted)
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Number the next commit will use, `None` when none are left
    pub fn next_number(&self) -> Option<OrderNumber> {
        self.next_number
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Tickets currently in storage, including earlier sessions
    pub fn stored_tickets(&self) -> ComandaResult<usize> {
        Ok(self.store.count()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Dish;
    use crate::domain::services::fakes::MemoryOrderStore;
    use crate::domain::value_objects::Money;

    fn soup() -> Dish {
        Dish::new("P001", "Soup", Money::new(2500.0), "Starter")
    }

    fn place(log: &mut OrderLog<MemoryOrderStore>, customer: &str) -> OrderNumber {
        let mut builder = log.begin_order(customer).unwrap();
        builder.add_item(&soup(), 1).unwrap();
        log.commit(builder).unwrap().number()
    }

    fn n(value: u32) -> OrderNumber {
        OrderNumber::new(value).unwrap()
    }

    #[test]
    fn numbers_are_sequential_from_one() {
        let mut log = OrderLog::new(MemoryOrderStore::default());
        assert_eq!(place(&mut log, "Ana"), n(1));
        assert_eq!(place(&mut log, "Luis"), n(2));
        assert_eq!(log.len(), 2);
        assert!(log.store.has(1) && log.store.has(2));
    }

    #[test]
    fn empty_commit_fails_and_keeps_log() {
        let mut log = OrderLog::new(MemoryOrderStore::default());
        place(&mut log, "Ana");

        let builder = log.begin_order("Luis").unwrap();
        let err = log.commit(builder).unwrap_err();

        assert!(matches!(err, ComandaError::EmptyOrder));
        assert_eq!(log.len(), 1);
        assert_eq!(log.next_number(), Some(n(2)));
    }

    #[test]
    fn failed_ticket_write_does_not_consume_number() {
        let mut log = OrderLog::new(MemoryOrderStore::default());
        log.store.fail_writes();

        let mut builder = log.begin_order("Ana").unwrap();
        builder.add_item(&soup(), 1).unwrap();

        assert!(log.commit(builder).is_err());
        assert!(log.is_empty());
        assert_eq!(log.next_number(), Some(n(1)));
    }

    #[test]
    fn deleted_numbers_are_not_reused() {
        let mut log = OrderLog::new(MemoryOrderStore::default());
        for customer in ["a", "b", "c", "d", "e"] {
            place(&mut log, customer);
        }

        log.remove(n(3)).unwrap();

        assert!(log.find(n(3)).is_none());
        assert!(!log.store.has(3));
        assert_eq!(place(&mut log, "f"), n(6));
    }

    #[test]
    fn remove_unknown_order_is_not_found() {
        let mut log = OrderLog::new(MemoryOrderStore::default());
        assert!(matches!(
            log.remove(n(9)),
            Err(ComandaError::OrderNotFound { number: 9 })
        ));
    }

    #[test]
    fn clear_all_resets_counter() {
        let mut log = OrderLog::new(MemoryOrderStore::default());
        place(&mut log, "Ana");
        place(&mut log, "Luis");

        let deleted = log.clear_all().unwrap();

        assert_eq!(deleted, 2);
        assert!(log.is_empty());
        assert_eq!(place(&mut log, "Eva"), n(1));
    }

    #[test]
    fn recover_continues_after_highest_ticket() {
        let log = OrderLog::recover(MemoryOrderStore::with_numbers(&[1, 4, 2])).unwrap();
        assert!(log.is_empty());
        assert_eq!(log.next_number(), Some(n(5)));
        assert_eq!(log.stored_tickets().unwrap(), 3);
    }

    #[test]
    fn recover_with_no_tickets_starts_at_one() {
        let log = OrderLog::recover(MemoryOrderStore::default()).unwrap();
        assert_eq!(log.next_number(), Some(OrderNumber::FIRST));
    }

    #[test]
    fn last_number_is_never_handed_out_twice() {
        let mut log = OrderLog::recover(MemoryOrderStore::with_numbers(&[u32::MAX - 1])).unwrap();
        assert_eq!(place(&mut log, "Ana"), n(u32::MAX));
        assert_eq!(log.next_number(), None);

        let mut builder = log.begin_order("Luis").unwrap();
        builder.add_item(&soup(), 1).unwrap();
        assert!(matches!(log.commit(builder), Err(ComandaError::OrderNumbersExhausted)));
        assert_eq!(log.len(), 1);

        log.clear_all().unwrap();
        assert_eq!(place(&mut log, "Eva"), n(1));
    }

    #[test]
    fn recover_after_largest_stored_number_refuses_commits() {
        let mut log = OrderLog::recover(MemoryOrderStore::with_numbers(&[u32::MAX])).unwrap();
        assert_eq!(log.next_number(), None);

        let mut builder = log.begin_order("Ana").unwrap();
        builder.add_item(&soup(), 1).unwrap();
        assert!(matches!(log.commit(builder), Err(ComandaError::OrderNumbersExhausted)));
        assert_eq!(log.stored_tickets().unwrap(), 1);
    }
}
