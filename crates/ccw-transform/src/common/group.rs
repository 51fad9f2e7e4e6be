//! Group-level fields shared by institutional claims.

use ccw_model::eob::{CodeableConcept, Extension};
use ccw_model::{ExplanationOfBenefit, InstitutionalGroup, Result, to_money};
use ccw_standards::{BenefitCategory, CodeRole, FinancialType};

use crate::common::benefit::{add_benefit_balance, amount};
use crate::common::provider::{CareTeamRole, add_care_team_member, assign_organization};
use crate::common::{non_blank, non_blank_char};
use crate::context::TransformContext;

/// Maps the group-level block every institutional claim type carries:
/// organization, facility and billing codes, discharge and payer status,
/// the attending physician and the claim-level charge totals.
pub fn map_institutional_group(
    eob: &mut ExplanationOfBenefit,
    ctx: &mut TransformContext<'_>,
    group: &InstitutionalGroup,
) -> Result<()> {
    assign_organization(eob, group.organization_npi.as_deref());

    for (role, code) in [
        (CodeRole::FacilityType, group.claim_facility_type_code),
        (CodeRole::ClaimFrequency, group.claim_frequency_code),
        (
            CodeRole::ServiceClassification,
            group.claim_service_classification_type_code,
        ),
    ] {
        if let Some(concept) = ctx.code_char(role, code)? {
            eob.extension.push(Extension::coding(role.system(), concept));
        }
    }
    if let Some(reason) = non_blank(group.claim_non_payment_reason_code.as_deref())
        && let Some(concept) = ctx.code(CodeRole::NonPaymentReason, reason)?
    {
        eob.extension
            .push(Extension::coding(CodeRole::NonPaymentReason.system(), concept));
    }

    if let Some(status) = non_blank(group.patient_discharge_status_code.as_deref())
        && let Some(concept) = ctx.code(CodeRole::DischargeStatus, status)?
    {
        eob.add_information(CodeableConcept::of(concept), None);
    }
    if let Some(payer) = non_blank_char(group.claim_primary_payer_code)
        && let Some(concept) = ctx.code_char(CodeRole::PrimaryPayer, payer)?
    {
        eob.add_information(CodeableConcept::of(concept), None);
    }

    add_care_team_member(
        eob,
        group.attending_physician_npi.as_deref(),
        CareTeamRole::Primary,
    );

    eob.total_cost = Some(to_money("totalChargeAmount", group.total_charge_amount)?);
    add_benefit_balance(
        eob,
        BenefitCategory::Medical,
        vec![amount(
            FinancialType::PrimaryPayerPaidAmount,
            to_money("primaryPayerPaidAmount", group.primary_payer_paid_amount)?,
        )],
    );
    Ok(())
}
