//! Hospice claim records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coded::{CodeSlot, deserialize_slots};
use crate::ids::{BeneficiaryId, ClaimGroupId, ClaimId};
use crate::institutional::{
    HcpcsCoding, InstitutionalGroup, LineNumber, LinePayments, RevenueCenterLine,
};
use crate::money::deserialize_exact;

/// A hospice claim header with its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospiceClaim {
    pub claim_id: ClaimId,
    pub claim_group_id: ClaimGroupId,
    pub beneficiary_id: BeneficiaryId,
    /// `NCH_NEAR_LINE_REC_IDENT_CD`
    pub near_line_record_id_code: char,
    /// `NCH_CLM_TYPE_CD`
    pub claim_type_code: String,
    /// `CLM_FROM_DT`
    pub date_from: NaiveDate,
    /// `CLM_THRU_DT`
    pub date_through: NaiveDate,
    /// `PRVDR_NUM`
    pub provider_number: String,
    /// `PRVDR_STATE_CD`
    pub provider_state_code: String,
    /// `CLM_PMT_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub payment_amount: Decimal,
    /// `NCH_PTNT_STATUS_IND_CD`
    #[serde(default)]
    pub patient_status_code: Option<char>,
    /// `CLM_UTLZTN_DAY_CNT`
    pub utilization_day_count: u32,
    /// `CLM_HOSPC_START_DT_ID`
    #[serde(default)]
    pub claim_hospice_start_date: Option<NaiveDate>,
    /// `NCH_BENE_DSCHRG_DT`
    #[serde(default)]
    pub beneficiary_discharge_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub institutional: InstitutionalGroup,
    /// `PRNCPAL_DGNS_CD` / `PRNCPAL_DGNS_VRSN_CD`
    #[serde(default)]
    pub diagnosis_principal: CodeSlot,
    /// `ICD_DGNS_CD1..25` / `ICD_DGNS_VRSN_CD1..25`
    #[serde(default, deserialize_with = "deserialize_slots")]
    pub diagnoses: [CodeSlot; 25],
    /// `FST_DGNS_E_CD` / `FST_DGNS_E_VRSN_CD`
    #[serde(default)]
    pub diagnosis_external_first: CodeSlot,
    /// `ICD_DGNS_E_CD1..12` / `ICD_DGNS_E_VRSN_CD1..12`
    #[serde(default, deserialize_with = "deserialize_slots")]
    pub diagnoses_external: [CodeSlot; 12],
    pub lines: Vec<HospiceClaimLine>,
}

/// One revenue-center line of a hospice claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospiceClaimLine {
    pub line_number: LineNumber,
    #[serde(flatten)]
    pub hcpcs: HcpcsCoding,
    /// `REV_CNTR_IDE_NDC_UPC_NUM`
    #[serde(default)]
    pub national_drug_code: Option<String>,
    #[serde(flatten)]
    pub payments: LinePayments,
    #[serde(flatten)]
    pub revenue: RevenueCenterLine,
    /// `REV_CNTR_DDCTBL_COINSRNC_CD`
    #[serde(default)]
    pub deductible_coinsurance_code: Option<char>,
}
