//! Fixed-point currency type stored as integer cents.
//!
//! Balances and fees are kept in minor units (an `i64` cent count) so that
//! ledger arithmetic is exact. `rust_decimal` is used only at the edges:
//! parsing dollar strings and computing interest.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Error produced when parsing a dollar string into [`Money`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoneyError {
    /// The input is not a decimal number.
    #[error("invalid amount: {0:?}")]
    Invalid(String),

    /// The input carries sub-cent precision (e.g. `1.005`).
    #[error("amount {0:?} has sub-cent precision")]
    SubCent(String),

    /// The input does not fit in an i64 cent count.
    #[error("amount {0:?} is out of range")]
    OutOfRange(String),
}

/// A monetary value in integer cents.
///
/// The count is signed: checking accounts may overdraft into negative
/// balances. Non-negativity of transaction amounts is an account-level
/// rule, not a property of the type.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bank_ledger::Money;
///
/// let amount = Money::from_str("10.50").unwrap();
/// assert_eq!(amount.cents(), 1050);
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero value.
    pub const ZERO: Self = Money(0);

    /// Creates a `Money` from a cent count.
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the cent count.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this value is below zero.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Computes `self * rate_percent / 100`, rounded half away from zero
    /// to whole cents.
    pub fn interest(self, rate_percent: Decimal) -> Money {
        let cents = Decimal::from(self.0) * rate_percent / Decimal::ONE_HUNDRED;
        let rounded = cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // Cent balances stay well inside the i64 range.
        Money(rounded.to_i64().expect("interest fits in i64 cents"))
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let dollars = Decimal::from_str(trimmed)
            .map_err(|_| ParseMoneyError::Invalid(trimmed.to_string()))?;
        let cents = dollars * Decimal::ONE_HUNDRED;
        if !cents.fract().is_zero() {
            return Err(ParseMoneyError::SubCent(trimmed.to_string()));
        }
        cents
            .to_i64()
            .map(Money)
            .ok_or_else(|| ParseMoneyError::OutOfRange(trimmed.to_string()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
