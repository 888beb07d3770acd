//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift in
//! the accumulators. The budget file stores plain decimal numbers in currency
//! units, so serialization converts at the edge.
//!
//! Amounts are limited to ±[`MAX_CENTS`]. Within that range a cent value
//! survives the trip through an `f64` decimal exactly; past it the conversion
//! error can reach half a cent.

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Largest magnitude, in cents, a stored amount may have ($10 trillion)
pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest representable amount
    pub const MAX: Money = Money(MAX_CENTS);

    /// Smallest representable amount
    pub const MIN: Money = Money(-MAX_CENTS);

    /// Create a Money amount from cents
    ///
    /// The value is taken as given; use [`Money::try_from_cents`] for
    /// untrusted input.
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from cents, rejecting values beyond ±`MAX_CENTS`
    pub fn try_from_cents(cents: i64) -> Option<Self> {
        (-MAX_CENTS..=MAX_CENTS).contains(&cents).then_some(Self(cents))
    }

    /// Create a Money amount from whole currency units (saturating)
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    /// Convert a decimal amount in currency units, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and values beyond ±`MAX_CENTS`.
    pub fn from_decimal(value: f64) -> Option<Self> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in currency units, as written to the budget file
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whether the amount lies within ±`MAX_CENTS`
    pub fn is_in_range(&self) -> bool {
        (-MAX_CENTS..=MAX_CENTS).contains(&self.0)
    }

    /// Add two amounts, returning `None` if the sum leaves the valid range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).and_then(Self::try_from_cents)
    }

    /// Subtract two amounts, returning `None` if the result leaves the valid range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).and_then(Self::try_from_cents)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "1,250.00".
    /// Digits beyond the second decimal place are rounded.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");

        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let value: f64 = rest.parse().map_err(|_| invalid())?;
        let amount = Self::from_decimal(value).ok_or_else(invalid)?;

        Ok(if negative { Self(-amount.0) } else { amount })
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_in_range() {
            return Err(ser::Error::custom(format!("amount out of range: {}", self)));
        }
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}
