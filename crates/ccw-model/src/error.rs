//! Error taxonomy for claim transformation.
//!
//! [`FieldError`] describes what is wrong with one field of one claim.
//! [`TransformError`] attaches the originating claim so a batch caller can
//! report the failure without inspecting the payload.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::claim::ClaimType;

/// Why a monetary amount was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AmountIssue {
    /// The amount is below zero.
    Negative,
    /// The amount cannot be expressed with two fractional digits.
    Precision,
}

impl fmt::Display for AmountIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => f.write_str("negative amounts are not allowed"),
            Self::Precision => f.write_str("more than two fractional digits"),
        }
    }
}

/// A problem with a single field of a claim record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid period in {field}: start {start} is after end {end}")]
    InvalidPeriod {
        field: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("invalid amount in {field} ({value}): {issue}")]
    InvalidAmount {
        field: String,
        value: Decimal,
        issue: AmountIssue,
    },

    #[error("invalid code format in {field}: {value:?}")]
    InvalidCodeFormat { field: String, value: String },

    #[error("diagnosis code {code} in {field} has no resolvable version ({version:?})")]
    DiagnosisVersionMismatch {
        field: String,
        code: String,
        version: Option<char>,
    },

    #[error("unmapped code {code:?} in {field}")]
    UnmappedCode { field: String, code: String },

    #[error("missing required field {field}")]
    MissingRequiredField { field: String },

    #[error("{actual} claim passed to the {expected} transformer")]
    UnsupportedClaimType {
        expected: ClaimType,
        actual: ClaimType,
    },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    pub fn unmapped(field: impl Into<String>, code: impl Into<String>) -> Self {
        Self::UnmappedCode {
            field: field.into(),
            code: code.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPeriod { .. } => ErrorKind::InvalidPeriod,
            Self::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            Self::InvalidCodeFormat { .. } => ErrorKind::InvalidCodeFormat,
            Self::DiagnosisVersionMismatch { .. } => ErrorKind::DiagnosisVersionMismatch,
            Self::UnmappedCode { .. } => ErrorKind::UnmappedCode,
            Self::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            Self::UnsupportedClaimType { .. } => ErrorKind::UnsupportedClaimType,
        }
    }

    /// Name of the offending field, or `None` for caller-contract errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidPeriod { field, .. }
            | Self::InvalidAmount { field, .. }
            | Self::InvalidCodeFormat { field, .. }
            | Self::DiagnosisVersionMismatch { field, .. }
            | Self::UnmappedCode { field, .. }
            | Self::MissingRequiredField { field } => Some(field),
            Self::UnsupportedClaimType { .. } => None,
        }
    }

    /// Attach the originating claim.
    pub fn for_claim(self, claim_type: ClaimType, claim_id: impl Into<String>) -> TransformError {
        TransformError {
            claim_id: claim_id.into(),
            claim_type,
            source: self,
        }
    }
}

/// Payload-free discriminant of [`FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ErrorKind {
    InvalidPeriod,
    InvalidAmount,
    InvalidCodeFormat,
    DiagnosisVersionMismatch,
    UnmappedCode,
    MissingRequiredField,
    UnsupportedClaimType,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPeriod => "InvalidPeriod",
            Self::InvalidAmount => "InvalidAmount",
            Self::InvalidCodeFormat => "InvalidCodeFormat",
            Self::DiagnosisVersionMismatch => "DiagnosisVersionMismatch",
            Self::UnmappedCode => "UnmappedCode",
            Self::MissingRequiredField => "MissingRequiredField",
            Self::UnsupportedClaimType => "UnsupportedClaimType",
        }
    }

    /// Caller-contract violations as opposed to bad source data.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::UnsupportedClaimType)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed transformation of one claim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{claim_type} claim {claim_id}: {source}")]
pub struct TransformError {
    pub claim_id: String,
    pub claim_type: ClaimType,
    #[source]
    pub source: FieldError,
}

impl TransformError {
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    pub fn field(&self) -> Option<&str> {
        self.source.field()
    }
}

pub type Result<T, E = FieldError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_error_names_claim_and_field() {
        let error =
            FieldError::missing("nonCoveredChargeAmount").for_claim(ClaimType::Hospice, "9992");
        assert_eq!(error.kind(), ErrorKind::MissingRequiredField);
        assert_eq!(error.field(), Some("nonCoveredChargeAmount"));
        assert_eq!(
            error.to_string(),
            "hospice claim 9992: missing required field nonCoveredChargeAmount"
        );
    }

    #[test]
    fn unsupported_claim_type_has_no_field() {
        let error = FieldError::UnsupportedClaimType {
            expected: ClaimType::Hospice,
            actual: ClaimType::Outpatient,
        };
        assert_eq!(error.field(), None);
        assert!(error.kind().is_contract_violation());
    }
}
