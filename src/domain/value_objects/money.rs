//! Money value object
//!
//! Prices and totals are plain floating point amounts. Display rounds to whole
//! units and groups thousands (`$12,500`), which is how the restaurant prints
//! prices on tickets and reports.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

use crate::error::{ComandaError, ComandaResult};

/// Amount of money in the restaurant's currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Parse user input. Negative amounts are accepted as-is.
    pub fn parse(input: &str) -> ComandaResult<Self> {
        let trimmed = input.trim();
        match trimmed.parse::<f64>() {
            Ok(amount) if amount.is_finite() => Ok(Self(amount)),
            _ => Err(ComandaError::invalid(
                "price",
                format!("'{}' is not a valid number", trimmed),
            )),
        }
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Multiply by an item quantity
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * f64::from(quantity))
    }

    /// Divide evenly across `count` parts; zero parts yields zero
    pub fn split(&self, count: usize) -> Self {
        if count == 0 {
            Money::ZERO
        } else {
            Self(self.0 / count as f64)
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = format!("{:.0}", self.0.abs());
        let sign = if self.0 < 0.0 && rounded != "0" { "-" } else { "" };
        let grouped = group_thousands(&rounded);
        f.pad(&format!("${}{}", sign, grouped))
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_decimal_and_whitespace() {
        assert_eq!(Money::parse(" 2500 ").unwrap(), Money::new(2500.0));
        assert_eq!(Money::parse("12.5").unwrap(), Money::new(12.5));
    }

    #[test]
    fn parse_accepts_negative_amounts() {
        let price = Money::parse("-300").unwrap();
        assert!(price.is_negative());
    }

    #[test]
    fn parse_rejects_garbage_and_non_finite() {
        assert!(matches!(
            Money::parse("abc"),
            Err(ComandaError::InvalidInput { field: "price", .. })
        ));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("inf").is_err());
        assert!(Money::parse("NaN").is_err());
    }

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Money::new(0.0).to_string(), "$0");
        assert_eq!(Money::new(999.0).to_string(), "$999");
        assert_eq!(Money::new(5000.0).to_string(), "$5,000");
        assert_eq!(Money::new(1234567.0).to_string(), "$1,234,567");
        assert_eq!(Money::new(-1500.0).to_string(), "$-1,500");
    }

    #[test]
    fn display_honors_width() {
        assert_eq!(format!("{:>8}", Money::new(5000.0)), "  $5,000");
    }

    #[test]
    fn split_by_zero_is_zero() {
        assert_eq!(Money::new(100.0).split(0), Money::ZERO);
        assert_eq!(Money::new(100.0).split(4), Money::new(25.0));
    }

    #[test]
    fn sum_of_amounts() {
        let total: Money = [Money::new(1.5), Money::new(2.5)].iter().sum();
        assert_eq!(total, Money::new(4.0));
    }
}
