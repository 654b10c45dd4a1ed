//! ReportWriter port - human-readable report files

use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::store_error::StoreResult;
use crate::domain::entities::{ClosingReport, Order};

/// Writes reports that are read by people, never by Comanda.
pub trait ReportWriter {
    /// Persist a closing report produced at `now`
    fn write_closing(&self, report: &ClosingReport, now: DateTime<Local>) -> StoreResult<PathBuf>;

    /// Persist a full listing of `orders` produced at `now`
    fn write_order_listing(&self, orders: &[Order], now: DateTime<Local>)
        -> StoreResult<PathBuf>;
}
