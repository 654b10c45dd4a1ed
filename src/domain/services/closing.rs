//! Closing report generation
//!
//! Pure functions over a slice of orders; nothing here reads or writes storage.

use chrono::{DateTime, Local};

use crate::domain::entities::{CategorySales, ClosingReport, Order, SalesSummary};
use crate::domain::value_objects::Money;
use crate::error::{ComandaError, ComandaResult};

/// Order count, revenue and average order value. Average is zero for no orders.
pub fn summarize(orders: &[Order]) -> SalesSummary {
    let total_revenue: Money = orders.iter().map(Order::total).sum();
    SalesSummary {
        order_count: orders.len(),
        total_revenue,
        average_order: total_revenue.split(orders.len()),
    }
}

/// Units sold per category, categories in the order they first appear
pub fn category_sales(orders: &[Order]) -> Vec<CategorySales> {
    let mut tallies: Vec<CategorySales> = Vec::new();
    for line in orders.iter().flat_map(Order::lines) {
        let category = line.dish().category();
        let quantity = u64::from(line.quantity());
        match tallies.iter_mut().find(|t| t.category == category) {
            Some(tally) => tally.quantity += quantity,
            None => tallies.push(CategorySales {
                category: category.to_string(),
                quantity,
            }),
        }
    }
    tallies
}

/// Category with the most units sold. On a tie the category seen first wins.
pub fn best_category(orders: &[Order]) -> Option<CategorySales> {
    let mut best: Option<CategorySales> = None;
    for tally in category_sales(orders) {
        if best.as_ref().map_or(true, |b| tally.quantity > b.quantity) {
            best = Some(tally);
        }
    }
    best
}

/// Build the closing report for `orders` as of `closed_at`
pub fn generate_closing(orders: &[Order], closed_at: DateTime<Local>) -> ComandaResult<ClosingReport> {
    if orders.is_empty() {
        return Err(ComandaError::NoOrders);
    }
    Ok(ClosingReport {
        closed_at,
        orders: orders.to_vec(),
        summary: summarize(orders),
        items_sold: orders.iter().map(Order::item_count).sum(),
        best_category: best_category(orders),
    })
}
