//! Coercion of loosely-typed request values into domain types.
//!
//! Product payloads arrive with numbers that may be JSON numbers or strings,
//! and identifiers as free-form text. Coercion never guesses: a value that
//! cannot be represented exactly is rejected with a [`CoercionError`].

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;
use uuid::Uuid;

use crate::uuids::TypedUuid;

/// Largest quantity the `BIGINT` column can hold.
pub const MAX_QUANTITY: u64 = i64::MAX.unsigned_abs();

/// Largest low-stock alert the `INTEGER` column can hold.
pub const MAX_LOW_STOCK_ALERT: u32 = i32::MAX.unsigned_abs();

/// Largest price the `NUMERIC(12, 2)` columns can hold.
pub const MAX_PRICE: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, 2);

/// A request value before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// Only the empty string counts as blank; `"0"` and `0` are real values.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct CoercionError {
    pub field: &'static str,
    pub reason: String,
}

impl CoercionError {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Drop absent and blank values.
pub(crate) fn present(value: Option<RawValue>) -> Option<RawValue> {
    value.filter(|value| !value.is_blank())
}

/// Keep text only when something remains after trimming; the original text is kept.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

pub(crate) fn to_decimal(field: &'static str, value: &RawValue) -> Result<Decimal, CoercionError> {
    let decimal = match value {
        RawValue::Integer(integer) => Decimal::from(*integer),
        RawValue::Float(float) => Decimal::try_from(*float)
            .map_err(|source| CoercionError::new(field, source.to_string()))?,
        RawValue::Text(text) => parse_decimal(text.trim())
            .map_err(|source| CoercionError::new(field, format!("{text:?}: {source}")))?,
    };

    if decimal.is_sign_negative() && !decimal.is_zero() {
        return Err(CoercionError::new(field, "must not be negative"));
    }

    Ok(decimal)
}

/// Plain notation first, then exponent notation such as `1e3`.
fn parse_decimal(text: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(text).or_else(|plain| {
        if text.contains(['e', 'E']) {
            Decimal::from_scientific(text)
        } else {
            Err(plain)
        }
    })
}

/// Coerce to a price; the value is stored rounded to cents.
pub(crate) fn to_price(field: &'static str, value: &RawValue) -> Result<Decimal, CoercionError> {
    let price = to_decimal(field, value)?;

    if price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero) > MAX_PRICE {
        return Err(CoercionError::new(
            field,
            format!("is out of range, must be at most {MAX_PRICE}"),
        ));
    }

    Ok(price)
}

/// Coerce to a non-negative whole number no larger than `max`.
pub(crate) fn to_whole(
    field: &'static str,
    value: &RawValue,
    max: u64,
) -> Result<u64, CoercionError> {
    let whole = match value {
        RawValue::Integer(integer) => u64::try_from(*integer)
            .map_err(|_negative| CoercionError::new(field, "must not be negative"))?,
        RawValue::Float(_) => {
            let decimal = to_decimal(field, value)?;

            if !decimal.fract().is_zero() {
                return Err(CoercionError::new(field, "must be a whole number"));
            }

            decimal
                .to_u64()
                .ok_or_else(|| CoercionError::new(field, "is out of range"))?
        }
        RawValue::Text(text) => {
            let text = text.trim();

            if text.starts_with('-') {
                return Err(CoercionError::new(field, "must not be negative"));
            }

            text.parse::<u64>()
                .map_err(|source| CoercionError::new(field, format!("{text:?}: {source}")))?
        }
    };

    if whole > max {
        return Err(CoercionError::new(field, format!("must be at most {max}")));
    }

    Ok(whole)
}

pub(crate) fn to_quantity(field: &'static str, value: &RawValue) -> Result<u64, CoercionError> {
    to_whole(field, value, MAX_QUANTITY)
}

pub(crate) fn to_low_stock_alert(
    field: &'static str,
    value: &RawValue,
) -> Result<u32, CoercionError> {
    let whole = to_whole(field, value, u64::from(MAX_LOW_STOCK_ALERT))?;

    u32::try_from(whole).map_err(|_overflow| CoercionError::new(field, "is out of range"))
}

pub(crate) fn to_uuid<T>(field: &'static str, value: &str) -> Result<TypedUuid<T>, CoercionError> {
    Uuid::parse_str(value.trim())
        .map(TypedUuid::from_uuid)
        .map_err(|source| CoercionError::new(field, format!("{value:?}: {source}")))
}
