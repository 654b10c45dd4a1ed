//! Ticket order store
//!
//! Each committed order becomes `orden_<NNNN>_<YYYYMMDD_HHMMSS>.txt`, a
//! receipt-style text file. Only the number in the filename is ever read back.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::Order;
use crate::domain::ports::{OrderStore, StoreError, StoreResult};
use crate::domain::value_objects::OrderNumber;
use crate::infrastructure::fs::{atomic_write, list_text_files};
use crate::text::{pad_end, pad_start, rule};

const TICKET_WIDTH: usize = 50;

/// `OrderStore` writing one ticket file per order
#[derive(Debug, Clone)]
pub struct TicketOrderStore {
    dir: PathBuf,
}

impl TicketOrderStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn tickets(&self) -> StoreResult<Vec<PathBuf>> {
        list_text_files(&self.dir).map_err(|e| StoreError::io(&self.dir, e))
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

impl OrderStore for TicketOrderStore {
    fn save(&self, order: &Order) -> StoreResult<PathBuf> {
        let stem = order.number().file_stem(order.created_at().naive_local());
        let path = self.dir.join(format!("{}.txt", stem));
        atomic_write(&path, &render_ticket(order)).map_err(|e| StoreError::io(&path, e))?;
        Ok(path)
    }

    fn delete(&self, number: OrderNumber) -> StoreResult<bool> {
        let prefix = number.file_prefix();
        let mut removed = false;
        for path in self.tickets()? {
            if file_name(&path).starts_with(&prefix) {
                std::fs::remove_file(&path).map_err(|e| StoreError::io(&path, e))?;
                debug!(path = %path.display(), "ticket deleted");
                removed = true;
            }
        }
        Ok(removed)
    }

    fn delete_all(&self) -> StoreResult<usize> {
        let tickets = self.tickets()?;
        for path in &tickets {
            std::fs::remove_file(path).map_err(|e| StoreError::io(path, e))?;
        }
        Ok(tickets.len())
    }

    fn highest_number(&self) -> StoreResult<Option<OrderNumber>> {
        let mut highest = None;
        for path in self.tickets()? {
            match OrderNumber::from_file_name(file_name(&path)) {
                Some(number) => highest = highest.max(Some(number)),
                None => warn!(path = %path.display(), "ignoring file without an order number"),
            }
        }
        Ok(highest)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self
            .tickets()?
            .iter()
            .filter(|p| OrderNumber::from_file_name(file_name(p)).is_some())
            .count())
    }
}

/// Receipt text for one order
pub fn render_ticket(order: &Order) -> String {
    let mut out = String::new();
    out.push_str(&format!("ORDEN #{}\n", order.number()));
    out.push_str(&rule('=', TICKET_WIDTH));
    out.push('\n');
    out.push_str(&format!("Cliente: {}\n", order.customer()));
    out.push_str(&format!(
        "Fecha: {}\n",
        order.created_at().format("%d/%m/%Y %H:%M")
    ));
    out.push_str(&rule('-', TICKET_WIDTH));
    out.push_str("\n\nDETALLE DE LA ORDEN:\n");
    out.push_str(&rule('-', TICKET_WIDTH));
    out.push('\n');
    for line in order.lines() {
        out.push_str(&format!(
            "{}x {} {}\n",
            line.quantity(),
            pad_end(line.dish().name(), 30),
            pad_start(&line.subtotal().to_string(), 11),
        ));
    }
    out.push_str(&rule('-', TICKET_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{} {}\n",
        pad_end("TOTAL:", 33),
        pad_start(&order.total().to_string(), 11)
    ));
    out.push_str(&rule('=', TICKET_WIDTH));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Dish, OrderBuilder};
    use crate::domain::value_objects::Money;
    use chrono::{Local, TimeZone};
    use std::fs;
    use tempfile::tempdir;

    fn order(number: u32, second: u32) -> Order {
        let at = Local.with_ymd_and_hms(2026, 1, 14, 20, 30, second).unwrap();
        let mut builder = OrderBuilder::started_at("Ana", at).unwrap();
        let soup = Dish::new("P001", "Sopa", Money::new(2500.0), "Entrada");
        builder.add_item(&soup, 2).unwrap();
        builder.finalize(OrderNumber::new(number).unwrap()).unwrap()
    }

    #[test]
    fn save_uses_numbered_filename() {
        let dir = tempdir().unwrap();
        let store = TicketOrderStore::new(dir.path());

        let path = store.save(&order(7, 15)).unwrap();

        assert_eq!(file_name(&path), "orden_0007_20260114_203015.txt");
        let ticket = fs::read_to_string(path).unwrap();
        assert!(ticket.starts_with("ORDEN #7\n"));
        assert!(ticket.contains("Cliente: Ana"));
        assert!(ticket.contains("Fecha: 14/01/2026 20:30"));
        assert!(ticket.contains("$5,000"));
    }

    #[test]
    fn ticket_rows_line_up() {
        let ticket = render_ticket(&order(1, 0));
        let item = ticket.lines().find(|l| l.starts_with("2x ")).unwrap();
        let total = ticket.lines().find(|l| l.starts_with("TOTAL:")).unwrap();
        assert_eq!(item.len(), total.len());
    }

    #[test]
    fn highest_number_ignores_foreign_files() {
        let dir = tempdir().unwrap();
        let store = TicketOrderStore::new(dir.path());
        store.save(&order(2, 0)).unwrap();
        store.save(&order(11, 1)).unwrap();
        fs::write(dir.path().join("notas.txt"), "").unwrap();
        fs::write(dir.path().join("orden_0099_x.bak"), "").unwrap();

        assert_eq!(store.highest_number().unwrap(), OrderNumber::new(11));
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn highest_number_of_empty_dir_is_none() {
        let dir = tempdir().unwrap();
        let store = TicketOrderStore::new(dir.path().join("missing"));
        assert_eq!(store.highest_number().unwrap(), None);
    }

    #[test]
    fn delete_matches_prefix_only() {
        let dir = tempdir().unwrap();
        let store = TicketOrderStore::new(dir.path());
        store.save(&order(1, 0)).unwrap();
        store.save(&order(10, 1)).unwrap();

        assert!(store.delete(OrderNumber::new(1).unwrap()).unwrap());
        assert!(!store.delete(OrderNumber::new(1).unwrap()).unwrap());
        assert_eq!(store.highest_number().unwrap(), OrderNumber::new(10));
    }

    #[test]
    fn delete_all_removes_every_text_file() {
        let dir = tempdir().unwrap();
        let store = TicketOrderStore::new(dir.path());
        store.save(&order(1, 0)).unwrap();
        store.save(&order(2, 1)).unwrap();
        fs::write(dir.path().join("keep.md"), "").unwrap();

        assert_eq!(store.delete_all().unwrap(), 2);
        assert_eq!(store.count().unwrap(), 0);
        assert!(dir.path().join("keep.md").exists());
    }
}
