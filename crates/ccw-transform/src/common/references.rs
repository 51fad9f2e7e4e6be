//! Coverage and patient references.

use ccw_model::eob::{Insurance, Reference};
use ccw_model::{BeneficiaryId, ClaimType, ExplanationOfBenefit};
use ccw_standards::{profile, systems};

/// Attaches the beneficiary's coverage for the claim type's Medicare segment
/// and the patient reference.
pub fn attach_beneficiary(
    eob: &mut ExplanationOfBenefit,
    claim_type: ClaimType,
    beneficiary_id: &BeneficiaryId,
) {
    let segment = profile(claim_type).segment;
    eob.insurance = Some(Insurance {
        coverage: Reference::to(systems::coverage_reference(
            beneficiary_id.as_str(),
            segment,
        )),
    });
    eob.patient = Reference::to(systems::patient_reference(beneficiary_id.as_str()));
}
