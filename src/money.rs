//! Money Handling Module
//!
//! All amounts are carried as `i64` cents (USD). Conversions between the
//! client-facing string representation and the internal cents value MUST go
//! through this module.
//!
//! ## Design Principles
//! 1. Smallest-unit arithmetic: no floats anywhere near a balance
//! 2. Two parse paths: strict (serde/API boundary) and lenient (raw form input)
//! 3. Explicit error handling: no silent truncation on the strict path

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Money conversion errors (strict path only)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount format: {0}")]
    InvalidFormat(String),

    #[error("Precision overflow: provided {provided} decimals, max allowed {max}")]
    PrecisionOverflow { provided: u32, max: u32 },

    #[error("Amount too large, would overflow")]
    Overflow,
}

/// A USD amount in cents.
///
/// Signed on purpose: raw user input may be negative, and the validator is
/// the component that decides what to do about that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Get the raw cents value
    #[inline]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Strict parse of a decimal dollar string (e.g. `"500.01"`, `"-10"`).
    ///
    /// Rejects empty input, non-numeric input, more than two decimal places
    /// and values that do not fit in `i64` cents. Negative values are allowed;
    /// rejecting them is the validator's job, not the parser's.
    pub fn parse(s: &str) -> Result<Money, MoneyError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyError::InvalidFormat("empty string".into()));
        }

        let d = Decimal::from_str(s).map_err(|e| MoneyError::InvalidFormat(e.to_string()))?;

        if d.scale() > 2 {
            return Err(MoneyError::PrecisionOverflow {
                provided: d.scale(),
                max: 2,
            });
        }

        let cents = d
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(MoneyError::Overflow)?;
        cents.to_i64().map(Money).ok_or(MoneyError::Overflow)
    }

    /// Lenient parse of raw capture-form input.
    ///
    /// Anything unparseable maps to `$0.00`, which the validator then rejects
    /// as non-positive. Values too large for `i64` cents read as `$0.00` the
    /// same way. Sub-cent digits truncate toward zero. This mirrors
    /// how the capture form hands its value over; the serde boundary stays
    /// strict.
    pub fn from_input(s: &str) -> Money {
        let Ok(d) = Decimal::from_str(s.trim()) else {
            return Money::ZERO;
        };
        let Some(cents) = d.checked_mul(Decimal::ONE_HUNDRED) else {
            return Money::ZERO;
        };
        cents.trunc().to_i64().map(Money).unwrap_or(Money::ZERO)
    }
}

impl std::fmt::Display for Money {
    /// Plain decimal dollars, no symbol or grouping (`500.01`, `-0.10`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// Serialize as a string to keep the JSON boundary precision-safe.
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(D::Error::custom)
    }
}

/// Format an amount for user-facing copy: `$1,234.56`, negative as `-$10.00`.
///
/// Display-only; nothing in the state machine keys off this string.
pub fn format_usd(amount: Money) -> String {
    let sign = if amount.cents() < 0 { "-" } else { "" };
    let abs = amount.cents().unsigned_abs();
    let (dollars, cents) = (abs / 100, abs % 100);

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}.{:02}", sign, grouped, cents)
}
