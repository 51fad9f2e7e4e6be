//! Billable and secondary periods.

use ccw_model::eob::Period;
use ccw_model::{Result, to_date_range, validate_period_dates};
use chrono::NaiveDate;

/// Validates the claim's service dates as its billable period.
///
/// Transformers call this once per claim and attach the result as is.
pub fn validate_billable_period(from: NaiveDate, through: NaiveDate) -> Result<Period> {
    let range = to_date_range("billablePeriod", from, Some(through))?;
    Ok(Period::days(Some(range.start), range.end))
}

/// Builds an optional secondary period from two optional bounds.
///
/// Returns `None` when neither bound is present. A single bound yields an
/// open period.
pub fn optional_period(
    field: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Option<Period>> {
    if start.is_none() && end.is_none() {
        return Ok(None);
    }
    validate_period_dates(field, start, end)?;
    Ok(Some(Period::days(start, end)))
}
