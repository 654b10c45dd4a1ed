//! Order number value object
//!
//! Order numbers start at 1 and are embedded zero-padded in ticket filenames:
//! `orden_0007_20260114_203015.txt`. The numeric part is what reload reads to
//! recover the counter, and what delete uses to find the ticket.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{ComandaError, ComandaResult};

/// Sequential order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderNumber(u32);

impl OrderNumber {
    pub const FIRST: OrderNumber = OrderNumber(1);

    /// Filename prefix shared by all tickets
    pub const FILE_PREFIX: &'static str = "orden_";

    /// Create from a raw value; zero is not a valid order number
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Parse an order number typed by the user
    pub fn parse(input: &str) -> ComandaResult<Self> {
        let trimmed = input.trim();
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| {
                ComandaError::invalid(
                    "order number",
                    format!("'{}' is not a positive whole number", trimmed),
                )
            })
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The following number, or `None` once the counter cannot go higher
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Prefix identifying this order's ticket regardless of timestamp
    pub fn file_prefix(&self) -> String {
        format!("{}{:04}_", Self::FILE_PREFIX, self.0)
    }

    /// Ticket file stem (no extension) for an order created at `created_at`
    pub fn file_stem(&self, created_at: NaiveDateTime) -> String {
        format!(
            "{}{}",
            self.file_prefix(),
            created_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Extract the order number from a ticket filename.
    ///
    /// Accepts any name of the form `orden_<digits>[_...][.ext]`; the digits may be
    /// wider than four characters once the counter passes 9999.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
        let rest = stem.strip_prefix(Self::FILE_PREFIX)?;
        let digits = rest.split('_').next()?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u32>().ok().and_then(Self::new)
    }
}

impl Default for OrderNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
