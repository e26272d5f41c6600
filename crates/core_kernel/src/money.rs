//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Display formatting follows the locale convention of the currency
//! (es-ES grouping for EUR, en grouping for USD/GBP).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    EUR,
    USD,
    GBP,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "€",
            Currency::USD => "$",
            Currency::GBP => "£",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
        }
    }

    /// Returns the digit grouping separator used when formatting amounts
    fn grouping_separator(&self) -> char {
        match self {
            Currency::EUR => '.',
            Currency::USD | Currency::GBP => ',',
        }
    }

    /// Returns the decimal separator used when formatting amounts
    fn decimal_separator(&self) -> char {
        match self {
            Currency::EUR => ',',
            Currency::USD | Currency::GBP => '.',
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places internally so derived values
/// (e.g. a monthly premium obtained by division) keep their raw precision;
/// rounding to the currency's 2 places happens explicitly or on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative()
    }

    /// Rounds half-up to the currency's standard decimal places
    ///
    /// Half-up is the rounding rule used throughout the tariff formulas:
    /// midpoints round toward positive infinity, so 1312.505 becomes
    /// 1312.51 and -1.005 becomes -1.00.
    pub fn round_half_up(&self) -> Self {
        let strategy = if self.amount.is_sign_negative() {
            rust_decimal::RoundingStrategy::MidpointTowardZero
        } else {
            rust_decimal::RoundingStrategy::MidpointAwayFromZero
        };
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(self.currency.decimal_places(), strategy),
            currency: self.currency,
        }
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Multiplies by a scalar (e.g., for rate calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Divides by a scalar
    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount / divisor, self.currency))
    }

    /// Formats the amount per the currency's locale convention
    ///
    /// EUR renders es-ES style with the symbol trailing (`1.300,00 €`),
    /// USD/GBP render with a leading symbol (`$1,300.00`). The value is
    /// rounded half-up to the currency's decimal places first.
    pub fn format_localized(&self) -> String {
        let rounded = self.round_half_up();
        let dp = self.currency.decimal_places() as usize;
        let digits = format!("{:.dp$}", rounded.amount.abs(), dp = dp);
        let (int_part, frac_part) = digits
            .split_once('.')
            .unwrap_or((digits.as_str(), ""));

        let grouped = group_digits(int_part, self.currency.grouping_separator());
        let sign = if rounded.amount.is_sign_negative() && !rounded.amount.is_zero() {
            "-"
        } else {
            ""
        };
        let number = format!("{}{}{}", grouped, self.currency.decimal_separator(), frac_part);

        match self.currency {
            Currency::EUR => format!("{}{} {}", sign, number, self.currency.symbol()),
            Currency::USD | Currency::GBP => {
                format!("{}{}{}", sign, self.currency.symbol(), number)
            }
        }
    }
}

/// Inserts a grouping separator every three digits, right to left
fn group_digits(int_part: &str, separator: char) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(separator);
        }
        out.push(*c);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_localized())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.currency)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        self.divide(divisor).expect("Division by zero in Money::div")
    }
}
