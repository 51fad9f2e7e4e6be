//! Outpatient claim records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coded::{CodeSlot, ProcedureSlot, deserialize_slots};
use crate::ids::{BeneficiaryId, ClaimGroupId, ClaimId};
use crate::institutional::{
    HcpcsCoding, InstitutionalGroup, LineNumber, LinePayments, RevenueCenterLine,
};
use crate::money::deserialize_exact;

/// An outpatient claim header with its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpatientClaim {
    pub claim_id: ClaimId,
    pub claim_group_id: ClaimGroupId,
    pub beneficiary_id: BeneficiaryId,
    pub near_line_record_id_code: char,
    pub claim_type_code: String,
    pub date_from: NaiveDate,
    pub date_through: NaiveDate,
    pub provider_number: String,
    pub provider_state_code: String,
    #[serde(deserialize_with = "deserialize_exact")]
    pub payment_amount: Decimal,
    #[serde(flatten)]
    pub institutional: InstitutionalGroup,
    /// `OP_PHYSN_NPI`
    #[serde(default)]
    pub operating_physician_npi: Option<String>,
    /// `OT_PHYSN_NPI`
    #[serde(default)]
    pub other_physician_npi: Option<String>,
    /// `NCH_BENE_BLOOD_DDCTBL_LBLTY_AM`
    #[serde(deserialize_with = "deserialize_exact")]
    pub blood_deductible_liability_amount: Decimal,
    /// `NCH_PROFNL_CMPNT_CHRG_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub professional_component_charge: Decimal,
    /// `NCH_BENE_PTB_DDCTBL_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub deductible_amount: Decimal,
    /// `NCH_BENE_PTB_COINSRNC_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub coinsurance_amount: Decimal,
    /// `CLM_OP_PRVDR_PMT_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub provider_payment_amount: Decimal,
    /// `CLM_OP_BENE_PMT_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub beneficiary_payment_amount: Decimal,
    #[serde(default)]
    pub diagnosis_principal: CodeSlot,
    #[serde(default, deserialize_with = "deserialize_slots")]
    pub diagnoses: [CodeSlot; 25],
    #[serde(default)]
    pub diagnosis_external_first: CodeSlot,
    #[serde(default, deserialize_with = "deserialize_slots")]
    pub diagnoses_external: [CodeSlot; 12],
    /// `RSN_VISIT_CD1..3` / `RSN_VISIT_VRSN_CD1..3`
    #[serde(default, deserialize_with = "deserialize_slots")]
    pub diagnoses_reason_for_visit: [CodeSlot; 3],
    /// `ICD_PRCDR_CD1..25` / `ICD_PRCDR_VRSN_CD1..25` / `PRCDR_DT1..25`
    #[serde(default, deserialize_with = "deserialize_slots")]
    pub procedures: [ProcedureSlot; 25],
    pub lines: Vec<OutpatientClaimLine>,
}

/// One revenue-center line of an outpatient claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpatientClaimLine {
    pub line_number: LineNumber,
    #[serde(flatten)]
    pub hcpcs: HcpcsCoding,
    #[serde(default)]
    pub national_drug_code: Option<String>,
    #[serde(flatten)]
    pub payments: LinePayments,
    #[serde(flatten)]
    pub revenue: RevenueCenterLine,
    /// `REV_CNTR_BLOOD_DDCTBL_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub blood_deductible_amount: Decimal,
    /// `REV_CNTR_CASH_DDCTBL_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub cash_deductible_amount: Decimal,
    /// `REV_CNTR_COINSRNC_WGE_ADJSTD_C`
    #[serde(deserialize_with = "deserialize_exact")]
    pub wage_adjusted_coinsurance_amount: Decimal,
    /// `REV_CNTR_RDCD_COINSRNC_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub reduced_coinsurance_amount: Decimal,
    /// `REV_CNTR_PTNT_RSPNSBLTY_PMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub patient_responsibility_amount: Decimal,
}
