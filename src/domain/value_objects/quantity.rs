//! Item quantity parsing

use crate::error::{ComandaError, ComandaResult};

/// Parse a line-item quantity typed by the user. Must be a whole number above zero.
pub fn parse_quantity(input: &str) -> ComandaResult<u32> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ComandaError::invalid("quantity", format!("'{}' is not a whole number", trimmed)))?;
    if value <= 0 {
        return Err(ComandaError::invalid("quantity", "must be greater than 0"));
    }
    u32::try_from(value).map_err(|_| ComandaError::invalid("quantity", "too large"))
}
