//! Output Rendering
//!
//! Text views shared by the subcommands and the interactive session, plus
//! the NDJSON event writer used by `--json`.

use std::io::{self, Write};

use serde_json::{json, Value};

use crate::application::StartupReport;
use crate::domain::entities::{ClosingReport, Dish, Order};
use crate::domain::services::CategoryGroup;
use crate::domain::value_objects::OrderNumber;
use crate::text::{pad_end, pad_start, rule};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

fn availability(dish: &Dish) -> &'static str {
    if dish.is_available() {
        "available"
    } else {
        "unavailable"
    }
}

/// `[P001] Soup - $2,500 (Starter) available`
pub fn dish_line(dish: &Dish) -> String {
    format!(
        "[{}] {} - {} ({}) {}",
        dish.id(),
        dish.name(),
        dish.price(),
        dish.category(),
        availability(dish)
    )
}

/// The menu, one block per category in first-seen order
pub fn menu(groups: &[CategoryGroup<'_>]) -> String {
    if groups.is_empty() {
        return "No dishes on the menu.\n".to_string();
    }

    let mut out = String::new();
    for group in groups {
        out.push_str(&format!("\n{}\n{}\n", group.category, rule('-', 40)));
        for dish in &group.dishes {
            out.push_str(&format!(
                "  [{}] {} {}{}\n",
                dish.id(),
                pad_end(dish.name(), 28),
                pad_start(&dish.price().to_string(), 10),
                if dish.is_available() { "" } else { "  (unavailable)" }
            ));
        }
    }
    out
}

/// Full detail of one order, every line with its subtotal
pub fn order_detail(order: &Order) -> String {
    let mut out = String::new();
    out.push_str(&format!("Order #{}\n", order.number()));
    out.push_str(&format!("Customer: {}\n", order.customer()));
    out.push_str(&format!(
        "Date: {}\n",
        order.created_at().format("%d/%m/%Y %H:%M")
    ));
    out.push_str(&rule('-', 50));
    out.push('\n');
    for line in order.lines() {
        out.push_str(&format!(
            "{:>3}x {} {}\n",
            line.quantity(),
            pad_end(line.dish().name(), 30),
            pad_start(&line.subtotal().to_string(), 11)
        ));
    }
    out.push_str(&rule('-', 50));
    out.push('\n');
    out.push_str(&format!(
        "{} {}\n",
        pad_end("TOTAL", 35),
        pad_start(&order.total().to_string(), 11)
    ));
    out
}

/// `#1    Ana                  2 items      $5,000`
pub fn order_summary(order: &Order) -> String {
    format!(
        "#{} {} {:>3} items {}",
        pad_end(&order.number().to_string(), 4),
        pad_end(order.customer(), 20),
        order.item_count(),
        pad_start(&order.total().to_string(), 12)
    )
}

/// Closing report as shown on screen
pub fn closing(report: &ClosingReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Closing at {}\n",
        report.closed_at.format("%d/%m/%Y %H:%M:%S")
    ));
    out.push_str(&rule('=', 50));
    out.push('\n');
    out.push_str(&format!("Orders:          {}\n", report.order_count()));
    out.push_str(&format!("Revenue:         {}\n", report.total_revenue()));
    out.push_str(&format!("Average order:   {}\n", report.average_order()));
    out.push_str(&format!("Dishes sold:     {}\n", report.items_sold));
    match &report.best_category {
        Some(best) => out.push_str(&format!(
            "Best category:   {} ({} dishes)\n",
            best.category, best.quantity
        )),
        None => out.push_str("Best category:   -\n"),
    }
    out.push_str(&rule('-', 50));
    out.push('\n');
    for order in &report.orders {
        out.push_str(&order_summary(order));
        out.push('\n');
    }
    out
}

/// Dish as a JSON object
pub fn dish_json(dish: &Dish) -> Value {
    json!({
        "id": dish.id(),
        "name": dish.name(),
        "price": dish.price(),
        "category": dish.category(),
        "available": dish.is_available(),
    })
}

/// Order as a JSON object, including computed totals
pub fn order_json(order: &Order) -> Value {
    let lines: Vec<Value> = order
        .lines()
        .iter()
        .map(|line| {
            json!({
                "dish_id": line.dish().id(),
                "name": line.dish().name(),
                "unit_price": line.dish().price(),
                "quantity": line.quantity(),
                "subtotal": line.subtotal(),
            })
        })
        .collect();

    json!({
        "number": order.number(),
        "customer": order.customer(),
        "created_at": order.created_at().to_rfc3339(),
        "lines": lines,
        "total": order.total(),
    })
}

/// Startup problems worth telling a person about
pub fn startup_notes(startup: &StartupReport) -> Vec<String> {
    let mut notes: Vec<String> = startup
        .skipped
        .iter()
        .map(|skipped| format!("skipped unreadable dish file {}", skipped))
        .collect();
    if startup.next_order.is_none() {
        notes.push("no order numbers left; clear the order log to restart at 1".to_string());
    }
    notes
}

/// Next order number for display; `none left` once the counter is used up
pub fn next_order_label(next: Option<OrderNumber>) -> String {
    next.map_or_else(|| "none left".to_string(), |n| n.to_string())
}
