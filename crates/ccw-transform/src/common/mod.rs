//! Mapping routines shared by the per-claim-type transformers.

pub mod adjudication;
pub mod benefit;
pub mod claim_type;
pub mod diagnosis;
pub mod group;
pub mod ids;
pub mod item;
pub mod period;
pub mod procedure;
pub mod provider;
pub mod references;
pub mod revenue;

use ccw_model::{FieldError, Result};

/// Optional source columns arrive blank when unset; a blank value is absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Single-character form of [`non_blank`].
pub fn non_blank_char(value: Option<char>) -> Option<char> {
    value.filter(|value| !value.is_whitespace())
}

/// Unwraps a field the current claim type declares mandatory.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| FieldError::missing(field))
}
