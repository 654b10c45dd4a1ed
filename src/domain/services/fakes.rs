//! In-memory port implementations for unit tests

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::domain::entities::{ClosingReport, Dish, Order};
use crate::domain::ports::{
    DishStore, LoadedDishes, OrderStore, ReportWriter, SkippedFile, StoreError, StoreResult,
};
use crate::domain::value_objects::OrderNumber;

fn refused(path: &str) -> StoreError {
    StoreError::io(
        Path::new(path),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "write refused"),
    )
}

#[derive(Default)]
pub struct MemoryDishStore {
    dishes: RefCell<Vec<Dish>>,
    skipped: RefCell<Vec<SkippedFile>>,
    failing: Cell<bool>,
}

impl MemoryDishStore {
    pub fn insert(&self, dish: Dish) {
        self.dishes.borrow_mut().push(dish);
    }

    pub fn skip(&self, name: &str) {
        self.skipped.borrow_mut().push(SkippedFile {
            path: PathBuf::from(name),
            reason: "malformed".to_string(),
        });
    }

    pub fn saved(&self, id: &str) -> Option<Dish> {
        self.dishes.borrow().iter().find(|d| d.id() == id).cloned()
    }

    pub fn fail_writes(&self) {
        self.failing.set(true);
    }
}

impl DishStore for MemoryDishStore {
    fn load_all(&self) -> StoreResult<LoadedDishes> {
        Ok(LoadedDishes {
            dishes: self.dishes.borrow().clone(),
            skipped: self.skipped.borrow().clone(),
        })
    }

    fn save(&self, dish: &Dish) -> StoreResult<()> {
        if self.failing.get() {
            return Err(refused(dish.id()));
        }
        let mut dishes = self.dishes.borrow_mut();
        match dishes.iter_mut().find(|d| d.id() == dish.id()) {
            Some(existing) => *existing = dish.clone(),
            None => dishes.push(dish.clone()),
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        if self.failing.get() {
            return Err(refused(id));
        }
        self.dishes.borrow_mut().retain(|d| d.id() != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryOrderStore {
    numbers: RefCell<Vec<OrderNumber>>,
    failing: Cell<bool>,
}

impl MemoryOrderStore {
    /// Pretend tickets for these numbers already exist
    pub fn with_numbers(numbers: &[u32]) -> Self {
        let store = Self::default();
        store
            .numbers
            .borrow_mut()
            .extend(numbers.iter().filter_map(|n| OrderNumber::new(*n)));
        store
    }

    pub fn has(&self, number: u32) -> bool {
        self.numbers.borrow().iter().any(|n| n.value() == number)
    }

    pub fn fail_writes(&self) {
        self.failing.set(true);
    }
}

impl OrderStore for MemoryOrderStore {
    fn save(&self, order: &Order) -> StoreResult<PathBuf> {
        if self.failing.get() {
            return Err(refused("ticket"));
        }
        self.numbers.borrow_mut().push(order.number());
        Ok(PathBuf::from(
            order.number().file_stem(order.created_at().naive_local()),
        ))
    }

    fn delete(&self, number: OrderNumber) -> StoreResult<bool> {
        if self.failing.get() {
            return Err(refused("ticket"));
        }
        let mut numbers = self.numbers.borrow_mut();
        let before = numbers.len();
        numbers.retain(|n| *n != number);
        Ok(numbers.len() != before)
    }

    fn delete_all(&self) -> StoreResult<usize> {
        if self.failing.get() {
            return Err(refused("tickets"));
        }
        Ok(self.numbers.borrow_mut().drain(..).count())
    }

    fn highest_number(&self) -> StoreResult<Option<OrderNumber>> {
        Ok(self.numbers.borrow().iter().max().copied())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.numbers.borrow().len())
    }
}

#[derive(Default)]
pub struct MemoryReportWriter {
    pub closings: RefCell<Vec<ClosingReport>>,
    pub listings: RefCell<Vec<usize>>,
}

impl ReportWriter for MemoryReportWriter {
    fn write_closing(&self, report: &ClosingReport, _now: DateTime<Local>) -> StoreResult<PathBuf> {
        self.closings.borrow_mut().push(report.clone());
        Ok(PathBuf::from("closing.txt"))
    }

    fn write_order_listing(
        &self,
        orders: &[Order],
        _now: DateTime<Local>,
    ) -> StoreResult<PathBuf> {
        self.listings.borrow_mut().push(orders.len());
        Ok(PathBuf::from("listing.txt"))
    }
}
