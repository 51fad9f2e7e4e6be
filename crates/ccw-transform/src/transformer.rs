//! Transformer trait and dispatch by claim type.
//!
//! Every claim type has one transformer, a unit struct implementing
//! [`ClaimTransformer`]. [`transform_with`] selects it from the aggregate's
//! own type tag, so a claim can never reach the wrong transformer through
//! the dispatcher. Calling a transformer directly with a foreign aggregate
//! is a caller-contract violation reported as
//! [`FieldError::UnsupportedClaimType`].

use ccw_model::{
    ClaimAggregate, ClaimId, ClaimType, ExplanationOfBenefit, FieldError, Result, TransformError,
};
use tracing::{debug, debug_span};

use crate::context::{TransformContext, TransformWarning};
use crate::hospice::HospiceTransformer;
use crate::options::TransformOptions;
use crate::outpatient::OutpatientTransformer;

/// A transformed claim with the warnings raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    pub resource: ExplanationOfBenefit,
    pub warnings: Vec<TransformWarning>,
}

/// Per-claim-type transformation into an `ExplanationOfBenefit` resource.
///
/// # Implementing a Transformer
///
/// Implement [`build`](Self::build) as a single pass over the claim record
/// using the routines in [`crate::common`], then add a dispatch arm to
/// [`transform_with`].
pub trait ClaimTransformer: Send + Sync {
    type Claim: 'static;

    const CLAIM_TYPE: ClaimType;

    /// Returns the record when the aggregate is of this transformer's type.
    fn select(aggregate: &ClaimAggregate) -> Option<&Self::Claim>;

    fn claim_id(claim: &Self::Claim) -> &ClaimId;

    /// Builds the resource. Any error aborts the claim.
    fn build(
        &self,
        claim: &Self::Claim,
        ctx: &mut TransformContext<'_>,
    ) -> Result<ExplanationOfBenefit>;

    /// Transforms one record, attaching the claim id to any failure.
    fn transform_claim(
        &self,
        claim: &Self::Claim,
        options: &TransformOptions,
    ) -> Result<TransformOutcome, TransformError> {
        let claim_id = Self::claim_id(claim);
        let _span = debug_span!(
            "transform",
            claim_id = %claim_id,
            claim_type = %Self::CLAIM_TYPE
        )
        .entered();

        let mut ctx = TransformContext::new(Self::CLAIM_TYPE, claim_id, options);
        match self.build(claim, &mut ctx) {
            Ok(resource) => {
                debug!(
                    items = resource.item.len(),
                    diagnoses = resource.diagnosis.len(),
                    warnings = ctx.warnings().len(),
                    "claim transformed"
                );
                Ok(TransformOutcome {
                    resource,
                    warnings: ctx.into_warnings(),
                })
            }
            Err(error) => {
                debug!(kind = %error.kind(), "claim rejected");
                Err(error.for_claim(Self::CLAIM_TYPE, claim_id.as_str()))
            }
        }
    }

    /// Transforms an aggregate that must be of this transformer's type.
    fn transform(
        &self,
        aggregate: &ClaimAggregate,
        options: &TransformOptions,
    ) -> Result<TransformOutcome, TransformError> {
        match Self::select(aggregate) {
            Some(claim) => self.transform_claim(claim, options),
            None => {
                let actual = aggregate.claim_type();
                Err(FieldError::UnsupportedClaimType {
                    expected: Self::CLAIM_TYPE,
                    actual,
                }
                .for_claim(actual, aggregate.claim_id().as_str()))
            }
        }
    }
}

const SUPPORTED: [ClaimType; 2] = [
    HospiceTransformer::CLAIM_TYPE,
    OutpatientTransformer::CLAIM_TYPE,
];

/// Claim types with a transformer.
pub fn supported_claim_types() -> &'static [ClaimType] {
    &SUPPORTED
}

/// Transforms a claim aggregate with the transformer of its claim type.
pub fn transform_with(
    aggregate: &ClaimAggregate,
    options: &TransformOptions,
) -> Result<TransformOutcome, TransformError> {
    match aggregate {
        ClaimAggregate::Hospice(claim) => HospiceTransformer.transform_claim(claim, options),
        ClaimAggregate::Outpatient(claim) => OutpatientTransformer.transform_claim(claim, options),
    }
}

/// Transforms a claim aggregate with default options, dropping warnings.
pub fn transform(aggregate: &ClaimAggregate) -> Result<ExplanationOfBenefit, TransformError> {
    transform_with(aggregate, &TransformOptions::default()).map(|outcome| outcome.resource)
}
