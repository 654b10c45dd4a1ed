//! Restaurant facade
//!
//! One object owning the menu, the order log, the current closing report and
//! the report writer. Every front end (subcommands, the interactive session,
//! integration tests) goes through it.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::info;

use crate::domain::entities::{ClosingReport, Dish, DishPatch, Order, OrderBuilder, OrderLine};
use crate::domain::ports::{DishStore, OrderStore, ReportWriter, SkippedFile};
use crate::domain::services::{generate_closing, CategoryGroup, DishEdit, DishRepository, OrderLog};
use crate::domain::value_objects::OrderNumber;
use crate::error::{ComandaError, ComandaResult};

/// What `Restaurant::open` found in storage
#[derive(Debug, Clone, PartialEq)]
pub struct StartupReport {
    pub dishes_loaded: usize,
    pub skipped: Vec<SkippedFile>,
    /// `None` when stored tickets already use the largest order number
    pub next_order: Option<OrderNumber>,
}

pub struct Restaurant<D: DishStore, O: OrderStore, R: ReportWriter> {
    menu: DishRepository<D>,
    log: OrderLog<O>,
    reports: R,
    closing: Option<ClosingReport>,
}

impl<D: DishStore, O: OrderStore, R: ReportWriter> Restaurant<D, O, R> {
    /// Load the menu and recover the order counter from storage
    pub fn open(dishes: D, orders: O, reports: R) -> ComandaResult<(Self, StartupReport)> {
        let (menu, skipped) = DishRepository::load(dishes)?;
        let log = OrderLog::recover(orders)?;

        let startup = StartupReport {
            dishes_loaded: menu.len(),
            skipped,
            next_order: log.next_number(),
        };
        info!(
            dishes = startup.dishes_loaded,
            next_order = ?startup.next_order.map(|n| n.value()),
            "restaurant opened"
        );

        Ok((
            Self {
                menu,
                log,
                reports,
                closing: None,
            },
            startup,
        ))
    }

    // ---- menu ----

    pub fn add_dish(&mut self, id: &str, name: &str, price: &str, category: &str) -> ComandaResult<&Dish> {
        self.menu.add(id, name, price, category)
    }

    pub fn find_dish(&self, id: &str) -> Option<&Dish> {
        self.menu.find(id)
    }

    /// Like `find_dish`, failing with `DishNotFound`
    pub fn dish(&self, id: &str) -> ComandaResult<&Dish> {
        self.menu
            .find(id)
            .ok_or_else(|| ComandaError::DishNotFound { id: id.to_string() })
    }

    pub fn edit_dish(&mut self, id: &str, patch: &DishPatch) -> ComandaResult<DishEdit> {
        self.menu.edit(id, patch)
    }

    pub fn remove_dish(&mut self, id: &str) -> ComandaResult<Dish> {
        self.menu.remove(id)
    }

    pub fn dishes(&self) -> &[Dish] {
        self.menu.all()
    }

    pub fn menu_by_category(&self) -> Vec<CategoryGroup<'_>> {
        self.menu.by_category()
    }

    // ---- orders ----

    pub fn begin_order(&self, customer: &str) -> ComandaResult<OrderBuilder> {
        self.log.begin_order(customer)
    }

    /// Look up `dish_id` on the menu and add it to `builder`
    pub fn add_to_order<'b>(
        &self,
        builder: &'b mut OrderBuilder,
        dish_id: &str,
        quantity: u32,
    ) -> ComandaResult<&'b OrderLine> {
        let dish = self.dish(dish_id)?;
        builder.add_item(dish, quantity)
    }

    pub fn commit_order(&mut self, builder: OrderBuilder) -> ComandaResult<&Order> {
        self.log.commit(builder)
    }

    pub fn find_order(&self, number: OrderNumber) -> Option<&Order> {
        self.log.find(number)
    }

    pub fn remove_order(&mut self, number: OrderNumber) -> ComandaResult<Order> {
        self.log.remove(number)
    }

    /// Orders committed during this session
    pub fn orders(&self) -> &[Order] {
        self.log.all()
    }

    pub fn next_order_number(&self) -> Option<OrderNumber> {
        self.log.next_number()
    }

    /// Tickets in storage, including those of earlier sessions
    pub fn stored_tickets(&self) -> ComandaResult<usize> {
        self.log.stored_tickets()
    }

    /// Delete every ticket, reset numbering to 1 and drop the closing report
    pub fn clear_orders(&mut self) -> ComandaResult<usize> {
        let deleted = self.log.clear_all()?;
        self.closing = None;
        Ok(deleted)
    }

    /// Write the full order listing of this session
    pub fn save_order_listing(&self) -> ComandaResult<PathBuf> {
        self.save_order_listing_at(Local::now())
    }

    pub fn save_order_listing_at(&self, now: DateTime<Local>) -> ComandaResult<PathBuf> {
        if self.log.is_empty() {
            return Err(ComandaError::NoOrders);
        }
        Ok(self.reports.write_order_listing(self.log.all(), now)?)
    }

    // ---- closing ----

    /// Build a closing report over this session's orders, replacing any
    /// previous one
    pub fn generate_closing(&mut self) -> ComandaResult<&ClosingReport> {
        self.generate_closing_at(Local::now())
    }

    pub fn generate_closing_at(&mut self, now: DateTime<Local>) -> ComandaResult<&ClosingReport> {
        let report = generate_closing(self.log.all(), now)?;
        info!(
            orders = report.order_count(),
            revenue = %report.total_revenue(),
            "closing report generated"
        );
        Ok(self.closing.insert(report))
    }

    /// The most recently generated closing report, if any
    pub fn closing(&self) -> Option<&ClosingReport> {
        self.closing.as_ref()
    }

    pub fn save_closing(&self) -> ComandaResult<PathBuf> {
        self.save_closing_at(Local::now())
    }

    pub fn save_closing_at(&self, now: DateTime<Local>) -> ComandaResult<PathBuf> {
        let report = self.closing.as_ref().ok_or(ComandaError::NoClosingReport)?;
        Ok(self.reports.write_closing(report, now)?)
    }

    pub fn reports(&self) -> &R {
        &self.reports
    }
}
