//! Monetary amounts.
//!
//! Every CCW amount is US dollars. Amounts are kept as exact decimals with a
//! scale of two; values that would need rounding are rejected.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Unexpected, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AmountIssue, FieldError, Result};

/// ISO 4217 currency code system.
pub const CURRENCY_SYSTEM: &str = "urn:std:iso:4217";

/// The only currency CCW amounts are recorded in.
pub const USD: &str = "USD";

/// A validated USD amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Money {
    value: Decimal,
}

impl Money {
    pub const ZERO: Money = Money {
        value: Decimal::from_parts(0, 0, 0, false, 2),
    };

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn currency(&self) -> &'static str {
        USD
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Money", 3)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("system", CURRENCY_SYSTEM)?;
        state.serialize_field("code", USD)?;
        state.end()
    }
}

/// Validates a sourced amount and fixes its scale at two digits.
///
/// Negative amounts and amounts with significant digits beyond the cent
/// fail with [`FieldError::InvalidAmount`]. Trailing zeros beyond the
/// second fractional digit are not significant (`1.500` is accepted as
/// `1.50`).
pub fn to_money(field: &str, value: Decimal) -> Result<Money> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid(field, value, AmountIssue::Negative));
    }
    if value.normalize().scale() > 2 {
        return Err(invalid(field, value, AmountIssue::Precision));
    }
    let mut value = value;
    value.rescale(2);
    value.set_sign_positive(true);
    Ok(Money { value })
}

/// Reads a sourced amount without going through binary floating point.
///
/// Decimal strings and integers are accepted as written. A JSON number with
/// a fraction has already been rounded to `f64` by the parser, so it is
/// rejected rather than stored with digits it never had.
pub fn deserialize_exact<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ExactDecimalVisitor)
}

/// Optional form of [`deserialize_exact`]; `null` reads as `None`.
pub fn deserialize_exact_option<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ExactDecimal>::deserialize(deserializer)?.map(|ExactDecimal(value)| value))
}

struct ExactDecimal(Decimal);

impl<'de> Deserialize<'de> for ExactDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize_exact(deserializer).map(ExactDecimal)
    }
}

struct ExactDecimalVisitor;

impl Visitor<'_> for ExactDecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal string or an integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Decimal, E> {
        Decimal::from_str_exact(value.trim())
            .map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Decimal, E> {
        Err(E::invalid_type(Unexpected::Float(value), &self))
    }
}

fn invalid(field: &str, value: Decimal, issue: AmountIssue) -> FieldError {
    FieldError::InvalidAmount {
        field: field.to_string(),
        value,
        issue,
    }
}
