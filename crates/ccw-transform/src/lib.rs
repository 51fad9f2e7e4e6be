//! CCW claim transformation pipeline.
//!
//! Each claim aggregate is turned into one `ExplanationOfBenefit` resource by
//! the transformer for its claim type. Transformers are pure functions of
//! their input: they perform no I/O and keep no state between calls, so
//! callers may run them concurrently across claims.
//!
//! - [`common`]: mapping routines shared by every claim type
//! - [`hospice`] and [`outpatient`]: the per-claim-type transformers
//! - [`transformer`]: the transformer trait and dispatch by claim type tag
//! - [`options`] and [`context`]: unmapped-code policy and warnings

#![deny(unsafe_code)]

pub mod common;
pub mod context;
pub mod hospice;
pub mod options;
pub mod outpatient;
pub mod transformer;

pub use common::ids::{build_resource_id, parse_resource_id};
pub use context::{TransformContext, TransformWarning};
pub use hospice::HospiceTransformer;
pub use options::{CodePolicy, TransformOptions};
pub use outpatient::OutpatientTransformer;
pub use transformer::{
    ClaimTransformer, TransformOutcome, supported_claim_types, transform, transform_with,
};
