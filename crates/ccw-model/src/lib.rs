//! CCW claim data model.
//!
//! This crate holds the immutable value types the transformation pipeline
//! works with:
//!
//! - **coded**: versioned codes, code slots and normalized coded concepts
//! - **money**: USD amounts with a fixed two-digit scale
//! - **period**: validated calendar date ranges
//! - **ids**: claim and beneficiary identifiers
//! - **claim**: the claim aggregate sum type and its per-claim-type records
//! - **eob**: the `ExplanationOfBenefit`-shaped output resource tree
//! - **error**: the field-level and per-claim error taxonomy

#![deny(unsafe_code)]

pub mod claim;
pub mod coded;
pub mod eob;
pub mod error;
pub mod hospice;
pub mod institutional;
pub mod ids;
pub mod money;
pub mod outpatient;
pub mod period;

pub use claim::{ClaimAggregate, ClaimType};
pub use coded::{
    CodeSlot, CodedConcept, DiagnosisRole, IcdVersion, ProcedureSlot, VersionedDiagnosisCode,
    VersionedProcedureCode, normalize_code,
};
pub use eob::ExplanationOfBenefit;
pub use error::{AmountIssue, ErrorKind, FieldError, Result, TransformError};
pub use hospice::{HospiceClaim, HospiceClaimLine};
pub use institutional::{
    HcpcsCoding, InstitutionalGroup, LineNumber, LinePayments, RevenueCenterLine,
};
pub use ids::{BeneficiaryId, ClaimGroupId, ClaimId};
pub use money::{Money, to_money};
pub use outpatient::{OutpatientClaim, OutpatientClaimLine};
pub use period::{DateRange, to_date_range, validate_period_dates};
