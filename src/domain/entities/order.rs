//! Order entity and its builder
//!
//! An `OrderBuilder` collects line items while the customer is ordering. It has
//! no number and touches no storage; dropping it abandons the order. Only the
//! order log turns a builder into a numbered `Order`.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::Dish;
use crate::domain::value_objects::{Money, OrderNumber};
use crate::error::{ComandaError, ComandaResult};

/// One dish on an order. The dish is a snapshot taken when the line was added,
/// so later menu edits do not change past orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    dish: Dish,
    quantity: u32,
}

impl OrderLine {
    pub fn dish(&self) -> &Dish {
        &self.dish
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn subtotal(&self) -> Money {
        self.dish.price().times(self.quantity)
    }
}

/// A committed customer order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    number: OrderNumber,
    customer: String,
    created_at: DateTime<Local>,
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn number(&self) -> OrderNumber {
        self.number
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Sum of line subtotals
    pub fn total(&self) -> Money {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// In-progress order
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    customer: String,
    created_at: DateTime<Local>,
    lines: Vec<OrderLine>,
}

impl OrderBuilder {
    /// Start an order now
    pub fn new(customer: &str) -> ComandaResult<Self> {
        Self::started_at(customer, Local::now())
    }

    /// Start an order with an explicit creation time
    pub fn started_at(customer: &str, created_at: DateTime<Local>) -> ComandaResult<Self> {
        let customer = customer.trim();
        if customer.is_empty() {
            return Err(ComandaError::invalid("customer", "name must not be empty"));
        }
        Ok(Self {
            customer: customer.to_string(),
            created_at,
            lines: Vec::new(),
        })
    }

    /// Add `quantity` units of `dish`, capturing its current price
    pub fn add_item(&mut self, dish: &Dish, quantity: u32) -> ComandaResult<&OrderLine> {
        if quantity == 0 {
            return Err(ComandaError::invalid("quantity", "must be greater than 0"));
        }
        if !dish.is_available() {
            return Err(ComandaError::DishUnavailable {
                id: dish.id().to_string(),
            });
        }
        self.lines.push(OrderLine {
            dish: dish.clone(),
            quantity,
        });
        Ok(&self.lines[self.lines.len() - 1])
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn running_total(&self) -> Money {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Seal the builder under `number`. Fails without touching anything when
    /// no items were added.
    pub(crate) fn finalize(self, number: OrderNumber) -> ComandaResult<Order> {
        if self.lines.is_empty() {
            return Err(ComandaError::EmptyOrder);
        }
        Ok(Order {
            number,
            customer: self.customer,
            created_at: self.created_at,
            lines: self.lines,
        })
    }
}
