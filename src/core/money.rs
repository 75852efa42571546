//! Exact decimal monetary amounts.
//!
//! `Money` wraps a [`rust_decimal::Decimal`] and only admits non-negative
//! values with at most two fractional digits, so every comparison and every
//! sum the ledger performs is exact. Amounts travel as decimal strings;
//! binary floating point is never accepted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MAX_SCALE: u32 = 2;

/// A non-negative amount of currency with two fractional digits.
///
/// # Example
///
/// ```rust
/// use coinvend::core::Money;
///
/// let coin: Money = "0.25".parse().unwrap();
/// let price = coin.checked_mul(3).unwrap();
///
/// assert_eq!(price, Money::from_cents(75));
/// assert_eq!(price.to_string(), "$0.75");
/// assert_eq!(price.to_decimal_string(), "0.75");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(Decimal);

/// Errors produced when turning text or a raw decimal into `Money`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}': {reason}")]
    Invalid { input: String, reason: String },

    #[error("amount '{0}' is negative")]
    Negative(String),

    #[error("amount '{0}' has more than two fractional digits")]
    TooPrecise(String),
}

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// The largest representable amount.
    pub const MAX: Money = Money(Decimal::MAX);

    /// Wrap a compile-time literal such as `dec!(0.25)`. The literal must
    /// already be non-negative with at most two fractional digits.
    pub(crate) const fn from_literal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build an amount from a whole number of hundredths.
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::from_i128_with_scale(i128::from(cents), MAX_SCALE))
    }

    /// Validate a raw decimal: it must be non-negative and carry no more
    /// than two significant fractional digits.
    pub fn from_decimal(amount: Decimal) -> Result<Self, MoneyParseError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyParseError::Negative(amount.to_string()));
        }
        if amount.normalize().scale() > MAX_SCALE {
            return Err(MoneyParseError::TooPrecise(amount.to_string()));
        }
        Ok(Self(amount.abs()))
    }

    /// The underlying decimal value.
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// True for the zero amount.
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Add two amounts, returning `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtract `other`, returning `None` if the result would be negative.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        if other > self {
            return None;
        }
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiply by a whole factor, returning `None` on overflow.
    pub fn checked_mul(self, factor: u64) -> Option<Money> {
        self.0.checked_mul(Decimal::from(factor)).map(Money)
    }

    /// True when this amount is an exact whole multiple of `unit`.
    ///
    /// A zero unit divides nothing.
    pub fn is_multiple_of(self, unit: Money) -> bool {
        self.0
            .checked_rem(unit.0)
            .is_some_and(|remainder| remainder.is_zero())
    }

    /// Plain decimal rendering without a currency sign, e.g. `"0.75"`.
    pub fn to_decimal_string(self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({})", self.to_decimal_string())
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parse `"0.25"`, `"1"` or `"$3.50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let amount = Decimal::from_str_exact(digits).map_err(|err| MoneyParseError::Invalid {
            input: s.to_string(),
            reason: err.to_string(),
        })?;
        Money::from_decimal(amount).map_err(|err| match err {
            MoneyParseError::Negative(_) => MoneyParseError::Negative(s.to_string()),
            MoneyParseError::TooPrecise(_) => MoneyParseError::TooPrecise(s.to_string()),
            other => other,
        })
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_decimal_string()
    }
}
