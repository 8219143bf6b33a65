//! Money type for expense amounts
//!
//! An amount is any finite signed decimal, held as an `f64` so that whatever
//! number the persisted blob carries (sub-cent fractions, very large values)
//! loads and saves back unchanged. Amounts are totally ordered, which the
//! sort relies on.

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};
use thiserror::Error;

/// A signed amount in currency units
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expenses::models::Money;
    /// let amount = Money::from_cents(450); // $4.50
    /// assert_eq!(amount.to_string(), "$4.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self::normalized(cents as f64 / 100.0)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Wrap a float amount; only finite values are accepted
    pub fn from_f64(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self::normalized(value))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts `4.50`, `+4.5`, `-4.5`, `$4.50`, `-$4.50`, `4`, `.75` and
    /// exponent forms such as `1e3`. Words like `inf` or `nan` are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let value: f64 = rest.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        Self::from_f64(if negative { -value } else { value })
    }

    /// Format with a currency symbol, rounded to two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let digits = format!("{:.2}", self.0.abs());
        let shows_nonzero = digits.bytes().any(|b| (b'1'..=b'9').contains(&b));
        let sign = if self.0 < 0.0 && shows_nonzero { "-" } else { "" };
        format!("{}{}{}", sign, symbol, digits)
    }

    // -0.0 and 0.0 must compare equal under `total_cmp`
    fn normalized(value: f64) -> Self {
        Self(value + 0.0)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::normalized(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid amount: '{0}'")]
    InvalidFormat(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}
