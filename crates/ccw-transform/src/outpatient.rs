//! Outpatient claim transformer.

use std::slice;

use ccw_model::eob::{CodeableConcept, EobStatus, Item, Payment};
use ccw_model::{
    ClaimAggregate, ClaimId, ClaimType, DiagnosisRole, ExplanationOfBenefit, OutpatientClaim,
    OutpatientClaimLine, Result, to_money,
};
use ccw_standards::{BenefitCategory, FinancialType, systems};

use crate::common::adjudication::build_line_adjudications;
use crate::common::benefit::{add_benefit_balance, amount};
use crate::common::claim_type::map_claim_type;
use crate::common::diagnosis::{SlotRange, attach_diagnoses};
use crate::common::group::map_institutional_group;
use crate::common::ids::new_resource;
use crate::common::item::{add_amount_extension, add_national_drug_code, start_item};
use crate::common::period::validate_billable_period;
use crate::common::procedure::attach_procedures;
use crate::common::provider::{CareTeamRole, add_care_team_member, assign_provider_number};
use crate::common::references::attach_beneficiary;
use crate::common::revenue::map_item_revenue;
use crate::context::TransformContext;
use crate::transformer::ClaimTransformer;

const DIAGNOSIS_SLOTS: &[SlotRange<OutpatientClaim>] = &[
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
    SlotRange {
        field: "diagnosisReasonForVisit",
        first_slot: Some(1),
        role: DiagnosisRole::ReasonForVisit,
        slots: |claim| claim.diagnoses_reason_for_visit.as_slice(),
    },
];

pub struct OutpatientTransformer;

impl ClaimTransformer for OutpatientTransformer {
    type Claim = OutpatientClaim;

    const CLAIM_TYPE: ClaimType = ClaimType::Outpatient;

    fn select(aggregate: &ClaimAggregate) -> Option<&OutpatientClaim> {
        match aggregate {
            ClaimAggregate::Outpatient(claim) => Some(claim),
            _ => None,
        }
    }

    fn claim_id(claim: &OutpatientClaim) -> &ClaimId {
        &claim.claim_id
    }

    fn build(
        &self,
        claim: &OutpatientClaim,
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

        let mut financial = Vec::with_capacity(6);
        for (kind, field, value) in [
            (
                FinancialType::BloodDeductibleLiability,
                "bloodDeductibleLiabilityAmount",
                claim.blood_deductible_liability_amount,
            ),
            (
                FinancialType::ProfessionalComponentCharge,
                "professionalComponentCharge",
                claim.professional_component_charge,
            ),
            (FinancialType::PartBDeductible, "deductibleAmount", claim.deductible_amount),
            (FinancialType::PartBCoinsurance, "coinsuranceAmount", claim.coinsurance_amount),
            (
                FinancialType::ProviderPaymentAmount,
                "providerPaymentAmount",
                claim.provider_payment_amount,
            ),
            (
                FinancialType::BeneficiaryPaymentAmount,
                "beneficiaryPaymentAmount",
                claim.beneficiary_payment_amount,
            ),
        ] {
            financial.push(amount(kind, to_money(field, value)?));
        }
        add_benefit_balance(&mut eob, BenefitCategory::Medical, financial);

        map_institutional_group(&mut eob, ctx, &claim.institutional)?;
        add_care_team_member(
            &mut eob,
            claim.operating_physician_npi.as_deref(),
            CareTeamRole::Assist,
        );
        add_care_team_member(
            &mut eob,
            claim.other_physician_npi.as_deref(),
            CareTeamRole::Other,
        );

        attach_diagnoses(&mut eob, claim, DIAGNOSIS_SLOTS)?;
        attach_procedures(&mut eob, "procedure", &claim.procedures)?;

        for line in &claim.lines {
            let item = map_line(&mut eob, claim, line)?;
            eob.item.push(item);
        }
        Ok(eob)
    }
}

fn map_line(
    eob: &mut ExplanationOfBenefit,
    claim: &OutpatientClaim,
    line: &OutpatientClaimLine,
) -> Result<Item> {
    let mut item = start_item(line.line_number, &line.hcpcs, &claim.provider_state_code)?;
    item.adjudication = build_line_adjudications(&line.payments)?;
    map_item_revenue(&mut item, eob, &line.revenue)?;
    add_national_drug_code(&mut item, line.national_drug_code.as_deref())?;

    for (url, field, value) in [
        (
            systems::BLOOD_DEDUCTIBLE_AMOUNT,
            "bloodDeductibleAmount",
            line.blood_deductible_amount,
        ),
        (
            systems::CASH_DEDUCTIBLE_AMOUNT,
            "cashDeductibleAmount",
            line.cash_deductible_amount,
        ),
        (
            systems::WAGE_ADJUSTED_COINSURANCE_AMOUNT,
            "wageAdjustedCoinsuranceAmount",
            line.wage_adjusted_coinsurance_amount,
        ),
        (
            systems::REDUCED_COINSURANCE_AMOUNT,
            "reducedCoinsuranceAmount",
            line.reduced_coinsurance_amount,
        ),
        (
            systems::PATIENT_RESPONSIBILITY_AMOUNT,
            "patientResponsibilityAmount",
            line.patient_responsibility_amount,
        ),
    ] {
        add_amount_extension(&mut item, url, field, value)?;
    }
    Ok(item)
}
