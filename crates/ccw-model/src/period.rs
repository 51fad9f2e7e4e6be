//! Calendar date ranges.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{FieldError, Result};

/// A validated date range with a known start and an optional end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.is_none_or(|end| date <= end)
    }
}

/// Builds a [`DateRange`], failing with [`FieldError::InvalidPeriod`] when
/// `from` is after `through`.
pub fn to_date_range(
    field: &str,
    from: NaiveDate,
    through: Option<NaiveDate>,
) -> Result<DateRange> {
    validate_period_dates(field, Some(from), through)?;
    Ok(DateRange {
        start: from,
        end: through,
    })
}

/// Checks the ordering of two optional bounds.
///
/// Only a pair with both bounds present can be out of order; a single bound
/// describes an open period and is always accepted.
pub fn validate_period_dates(
    field: &str,
    from: Option<NaiveDate>,
    through: Option<NaiveDate>,
) -> Result<()> {
    match (from, through) {
        (Some(start), Some(end)) if start > end => Err(FieldError::InvalidPeriod {
            field: field.to_string(),
            start,
            end,
        }),
        _ => Ok(()),
    }
}
