//! Money type for representing expense amounts
//!
//! Amounts are exact decimals, so whatever was typed or stored comes back
//! unchanged (`12.345` stays `12.345`). Arithmetic saturates instead of
//! overflowing. The currency itself is carried separately (see
//! [`super::Currency`]).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Symbols accepted (and ignored) in front of an amount when parsing
const PARSE_SYMBOLS: [char; 5] = ['$', '€', '£', '¥', '₹'];

/// Largest accepted magnitude, in whole currency units
const MAX_UNITS: i64 = 1_000_000_000_000;

/// Fractional digits always shown when formatting
const DISPLAY_SCALE: u32 = 2;

/// Represents a monetary amount as an exact decimal
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        let magnitude = cents.unsigned_abs();
        Self(Decimal::from_parts(
            magnitude as u32,
            (magnitude >> 32) as u32,
            0,
            cents < 0,
            2,
        ))
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self::from_cents(units * 100 + cents)
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Number of digits after the decimal point as written
    pub fn decimal_places(&self) -> u32 {
        self.0.scale()
    }

    /// Approximate value for charts and percentages
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_mul(self, factor: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(factor)).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5", ".5",
    /// "12.345". The value is kept exactly as written.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.trim_start_matches(PARSE_SYMBOLS.as_slice());
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (units, fraction) = match s.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (s, ""),
        };
        if units.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !all_digits(units) || !all_digits(fraction) {
            return Err(invalid());
        }

        let normalized = match (units.is_empty(), fraction.is_empty()) {
            (_, true) => units.to_string(),
            (true, false) => format!("0.{}", fraction),
            (false, false) => format!("{}.{}", units, fraction),
        };

        let mut value = Decimal::from_str_exact(&normalized)
            .map_err(|_| MoneyParseError::OutOfRange(s.to_string()))?;
        if value > Decimal::from(MAX_UNITS) {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }
        if negative && !value.is_zero() {
            value.set_sign_negative(true);
        }

        Ok(Self(value))
    }

    /// Format with a currency symbol, e.g. "$10.50" or "-€3.00"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, self.abs())
        } else {
            format!("{}{}", symbol, self)
        }
    }
}

fn all_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Plain decimal form with at least two fractional digits, as stored in the
/// CSV file. Extra precision is printed as is.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        if value.scale() < DISPLAY_SCALE {
            value.rescale(DISPLAY_SCALE);
        }
        write!(f, "{}", value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
