//! Hospice claim transformer.

use std::slice;

use ccw_model::eob::{CodeableConcept, EobStatus, Extension, Item, Payment};
use ccw_model::{
    ClaimAggregate, ClaimId, ClaimType, DiagnosisRole, ExplanationOfBenefit, HospiceClaim,
    HospiceClaimLine, Result, to_money,
};
use ccw_standards::{BenefitCategory, CodeRole, FinancialType, systems};

use crate::common::adjudication::build_line_adjudications;
use crate::common::benefit::{add_benefit_balance, utilization};
use crate::common::claim_type::map_claim_type;
use crate::common::diagnosis::{SlotRange, attach_diagnoses};
use crate::common::group::map_institutional_group;
use crate::common::ids::new_resource;
use crate::common::item::{add_national_drug_code, start_item};
use crate::common::non_blank_char;
use crate::common::period::{optional_period, validate_billable_period};
use crate::common::provider::assign_provider_number;
use crate::common::references::attach_beneficiary;
use crate::common::revenue::map_item_revenue;
use crate::context::TransformContext;
use crate::transformer::ClaimTransformer;

/// Diagnosis slots of a hospice claim, in output precedence order.
const DIAGNOSIS_SLOTS: &[SlotRange<HospiceClaim>] = &[
    SlotRange {
        field: "diagnosisPrincipal",
        first_slot: None,
        role: DiagnosisRole::Principal,
        slots: |claim| slice::from_ref(&claim.diagnosis_principal),
    },
    SlotRange {
        field: "diagnosis",
        first_slot: Some(1),
        role: DiagnosisRole::Additional,
        slots: |claim| &claim.diagnoses[..12],
    },
    SlotRange {
        field: "diagnosis",
        first_slot: Some(13),
        role: DiagnosisRole::Additional,
        slots: |claim| &claim.diagnoses[12..],
    },
    SlotRange {
        field: "diagnosisExternalFirst",
        first_slot: None,
        role: DiagnosisRole::ExternalCauseFirst,
        slots: |claim| slice::from_ref(&claim.diagnosis_external_first),
    },
    SlotRange {
        field: "diagnosisExternal",
        first_slot: Some(1),
        role: DiagnosisRole::ExternalCause,
        slots: |claim| claim.diagnoses_external.as_slice(),
    },
];

pub struct HospiceTransformer;

impl ClaimTransformer for HospiceTransformer {
    type Claim = HospiceClaim;

    const CLAIM_TYPE: ClaimType = ClaimType::Hospice;

    fn select(aggregate: &ClaimAggregate) -> Option<&HospiceClaim> {
        match aggregate {
            ClaimAggregate::Hospice(claim) => Some(claim),
            _ => None,
        }
    }

    fn claim_id(claim: &HospiceClaim) -> &ClaimId {
        &claim.claim_id
    }

    fn build(
        &self,
        claim: &HospiceClaim,
        ctx: &mut TransformContext<'_>,
    ) -> Result<ExplanationOfBenefit> {
        let mut eob = new_resource(Self::CLAIM_TYPE, &claim.claim_id, &claim.claim_group_id);
        eob.kind = CodeableConcept {
            coding: map_claim_type(
                Self::CLAIM_TYPE,
                Some(claim.near_line_record_id_code),
                Some(claim.claim_type_code.as_str()),
            )?,
        };
        attach_beneficiary(&mut eob, Self::CLAIM_TYPE, &claim.beneficiary_id);
        eob.status = EobStatus::Active;

        eob.billable_period = Some(validate_billable_period(
            claim.date_from,
            claim.date_through,
        )?);
        assign_provider_number(&mut eob, Some(claim.provider_number.as_str()));
        eob.payment = Some(Payment {
            amount: to_money("paymentAmount", claim.payment_amount)?,
        });

        if let Some(status) = non_blank_char(claim.patient_status_code)
            && let Some(concept) = ctx.code_char(CodeRole::PatientStatus, status)?
        {
            eob.add_information(CodeableConcept::of(concept), None);
        }

        add_benefit_balance(
            &mut eob,
            BenefitCategory::Medical,
            vec![utilization(
                FinancialType::SystemUtilizationDayCount,
                claim.utilization_day_count,
            )],
        );

        eob.hospitalization = optional_period(
            "hospicePeriod",
            claim.claim_hospice_start_date,
            claim.beneficiary_discharge_date,
        )?;

        map_institutional_group(&mut eob, ctx, &claim.institutional)?;
        attach_diagnoses(&mut eob, claim, DIAGNOSIS_SLOTS)?;

        for line in &claim.lines {
            let item = map_line(&mut eob, ctx, claim, line)?;
            eob.item.push(item);
        }
        Ok(eob)
    }
}

fn map_line(
    eob: &mut ExplanationOfBenefit,
    ctx: &mut TransformContext<'_>,
    claim: &HospiceClaim,
    line: &HospiceClaimLine,
) -> Result<Item> {
    let mut item = start_item(line.line_number, &line.hcpcs, &claim.provider_state_code)?;
    item.adjudication = build_line_adjudications(&line.payments)?;
    map_item_revenue(&mut item, eob, &line.revenue)?;
    add_national_drug_code(&mut item, line.national_drug_code.as_deref())?;

    if let Some(code) = non_blank_char(line.deductible_coinsurance_code)
        && let Some(concept) = ctx.code_char(CodeRole::DeductibleCoinsurance, code)?
        && let Some(revenue) = item.revenue.as_mut()
    {
        revenue
            .extension
            .push(Extension::coding(systems::DEDUCTIBLE_COINSURANCE_CODE, concept));
    }
    Ok(item)
}
