//! Closing report entity
//!
//! End-of-day snapshot of the order log. Built by
//! [`generate_closing`](crate::domain::services::generate_closing); never reloaded.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::Order;
use crate::domain::value_objects::Money;

/// Units sold for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    pub category: String,
    pub quantity: u64,
}

/// Aggregates shared by the closing report and the saved order listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub order_count: usize,
    pub total_revenue: Money,
    pub average_order: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosingReport {
    pub closed_at: DateTime<Local>,
    pub orders: Vec<Order>,
    pub summary: SalesSummary,
    pub items_sold: u64,
    pub best_category: Option<CategorySales>,
}

impl ClosingReport {
    pub fn order_count(&self) -> usize {
        self.summary.order_count
    }

    pub fn total_revenue(&self) -> Money {
        self.summary.total_revenue
    }

    pub fn average_order(&self) -> Money {
        self.summary.average_order
    }
}
