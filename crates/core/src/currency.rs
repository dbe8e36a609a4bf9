//! Currency
//!
//! Euro amounts formatted the way German-locale storefronts display them:
//! `.` between thousands, `,` before the cents and the symbol after the
//! amount, separated by a non-breaking space (`1.234,56 €`).

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Returned for any value that is not a finite number.
pub const ZERO_EUROS: &str = "0,00\u{a0}€";

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// A loosely typed value to be displayed as a price.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyInput {
    /// A number
    Number(f64),

    /// An exact decimal amount
    Decimal(Decimal),

    /// Text that may contain a number, such as `"789.10"`
    Text(String),

    /// No value, treated as zero
    Null,
}

impl Default for CurrencyInput {
    fn default() -> Self {
        CurrencyInput::Number(0.0)
    }
}

impl CurrencyInput {
    /// Interprets the value as a decimal amount.
    ///
    /// Returns `None` when the value is not a finite number or lies outside
    /// the range of [`Decimal`]. Empty or
    /// whitespace-only text and [`CurrencyInput::Null`] count as zero.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            CurrencyInput::Number(number) => decimal_from_f64(*number),
            CurrencyInput::Decimal(decimal) => Some(*decimal),
            CurrencyInput::Text(text) => parse_decimal(text),
            CurrencyInput::Null => Some(Decimal::ZERO),
        }
    }

    /// The value as a finite `f64`, for numbers outside [`Decimal`]'s range.
    fn to_finite_f64(&self) -> Option<f64> {
        let number = match self {
            CurrencyInput::Number(number) => *number,
            CurrencyInput::Text(text) => parse_number(text)?,
            CurrencyInput::Decimal(_) | CurrencyInput::Null => return None,
        };

        number.is_finite().then_some(number)
    }
}

impl From<f64> for CurrencyInput {
    fn from(value: f64) -> Self {
        CurrencyInput::Number(value)
    }
}

impl From<i32> for CurrencyInput {
    fn from(value: i32) -> Self {
        CurrencyInput::Number(f64::from(value))
    }
}

impl From<i64> for CurrencyInput {
    fn from(value: i64) -> Self {
        CurrencyInput::Decimal(Decimal::from(value))
    }
}

impl From<Decimal> for CurrencyInput {
    fn from(value: Decimal) -> Self {
        CurrencyInput::Decimal(value)
    }
}

impl From<&str> for CurrencyInput {
    fn from(value: &str) -> Self {
        CurrencyInput::Text(value.to_string())
    }
}

impl From<String> for CurrencyInput {
    fn from(value: String) -> Self {
        CurrencyInput::Text(value)
    }
}

impl<T: Into<CurrencyInput>> From<Option<T>> for CurrencyInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(CurrencyInput::Null, Into::into)
    }
}

/// Formats a value as a euro amount using German conventions.
///
/// Values that are not finite numbers format as [`ZERO_EUROS`]. Negative
/// amounts keep their sign even when they round to zero (`-0,00 €`).
///
/// ```
/// use comercify::currency::eurilize;
///
/// assert_eq!(eurilize(1234.56), "1.234,56\u{a0}€");
/// assert_eq!(eurilize("789.10"), "789,10\u{a0}€");
/// assert_eq!(eurilize(None::<f64>), "0,00\u{a0}€");
/// assert_eq!(eurilize("abc"), "0,00\u{a0}€");
/// ```
pub fn eurilize(value: impl Into<CurrencyInput>) -> String {
    let value = value.into();

    if let Some(amount) = value.to_decimal() {
        return format_money(&Money::from_decimal(amount, iso::EUR));
    }

    value.to_finite_f64().map_or_else(
        || ZERO_EUROS.to_string(),
        |number| format_float(number, iso::EUR),
    )
}

/// Formats money with grouped thousands, a decimal comma and a trailing symbol.
fn format_money(money: &Money<'_, Currency>) -> String {
    let currency = money.currency();
    let precision = currency.exponent;

    let amount = money
        .amount()
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);

    let digits = format!("{:.*}", precision as usize, amount.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    write_amount(*money.amount() < Decimal::ZERO, whole, fraction, currency)
}

/// Formats a number too large for [`Decimal`].
///
/// At that magnitude an `f64` has no fractional part, so the cents are zero.
fn format_float(number: f64, currency: &Currency) -> String {
    let digits = number.abs().to_string();
    let whole = digits.split_once('.').map_or(digits.as_str(), |(whole, _)| whole);
    let fraction = "0".repeat(currency.exponent as usize);

    write_amount(number < 0.0, whole, &fraction, currency)
}

fn write_amount(negative: bool, whole: &str, fraction: &str, currency: &Currency) -> String {
    let mut formatted = String::with_capacity(whole.len() + fraction.len() + 8);

    if negative {
        formatted.push('-');
    }

    formatted.push_str(&group_thousands(whole));

    if !fraction.is_empty() {
        formatted.push(DECIMAL_SEPARATOR);
        formatted.push_str(fraction);
    }

    formatted.push(SYMBOL_SEPARATOR);
    formatted.push_str(currency.symbol);

    formatted
}

fn group_thousands(whole: &str) -> String {
    let len = whole.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);

    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }

        grouped.push(digit);
    }

    grouped
}

fn decimal_from_f64(number: f64) -> Option<Decimal> {
    if number.is_finite() {
        Decimal::from_f64(number)
    } else {
        None
    }
}

/// Parses text the way a browser converts a string to a number: surrounding
/// whitespace is ignored and blank text is zero.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Some(0.0);
    }

    text.parse::<f64>().ok()
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    let number = parse_number(text).filter(|number| number.is_finite())?;
    let text = text.trim();

    if text.is_empty() {
        return Some(Decimal::ZERO);
    }

    Decimal::from_str(text)
        .or_else(|_err| Decimal::from_scientific(text))
        .ok()
        .or_else(|| Decimal::from_f64(number))
}
