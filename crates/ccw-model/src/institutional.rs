//! Field groups shared by the institutional claim types.
//!
//! Inpatient, outpatient, HHA, hospice and SNF records carry the same
//! group-level billing fields and the same revenue-center line fields. They
//! are flattened into each claim record so the source layout stays intact.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::{deserialize_exact, deserialize_exact_option};

/// Group-level fields common to institutional claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionalGroup {
    /// `ORG_NPI_NUM`
    #[serde(default)]
    pub organization_npi: Option<String>,
    /// `CLM_FAC_TYPE_CD`
    pub claim_facility_type_code: char,
    /// `CLM_FREQ_CD`
    pub claim_frequency_code: char,
    /// `CLM_MDCR_NON_PMT_RSN_CD`
    #[serde(default)]
    pub claim_non_payment_reason_code: Option<String>,
    /// `PTNT_DSCHRG_STUS_CD`
    #[serde(default)]
    pub patient_discharge_status_code: Option<String>,
    /// `CLM_SRVC_CLSFCTN_TYPE_CD`
    pub claim_service_classification_type_code: char,
    /// `NCH_PRMRY_PYR_CD`
    #[serde(default)]
    pub claim_primary_payer_code: Option<char>,
    /// `AT_PHYSN_NPI`
    #[serde(default)]
    pub attending_physician_npi: Option<String>,
    /// `CLM_TOT_CHRG_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub total_charge_amount: Decimal,
    /// `NCH_PRMRY_PYR_CLM_PD_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub primary_payer_paid_amount: Decimal,
}

/// Revenue-center fields common to institutional claim lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueCenterLine {
    /// `REV_CNTR`
    pub revenue_center_code: String,
    /// `REV_CNTR_RATE_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub rate_amount: Decimal,
    /// `REV_CNTR_TOT_CHRG_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub total_charge_amount: Decimal,
    /// `REV_CNTR_NCVRD_CHRG_AMT`
    #[serde(default, deserialize_with = "deserialize_exact_option")]
    pub non_covered_charge_amount: Option<Decimal>,
    /// `REV_CNTR_UNIT_CNT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub unit_count: Decimal,
    /// `REV_CNTR_NDC_QTY`
    #[serde(default, deserialize_with = "deserialize_exact_option")]
    pub national_drug_code_quantity: Option<Decimal>,
    /// `REV_CNTR_NDC_QTY_QLFR_CD`
    #[serde(default)]
    pub national_drug_code_qualifier_code: Option<String>,
    /// `RNDRNG_PHYSN_NPI`
    #[serde(default)]
    pub rendering_physician_npi: Option<String>,
}

/// HCPCS coding of one claim line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HcpcsCoding {
    /// `HCPCS_CD`
    pub hcpcs_code: Option<String>,
    /// `HCPCS_1ST_MDFR_CD`
    pub hcpcs_initial_modifier_code: Option<String>,
    /// `HCPCS_2ND_MDFR_CD`
    pub hcpcs_second_modifier_code: Option<String>,
}

/// Line fields every institutional claim line carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePayments {
    /// `REV_CNTR_PRVDR_PMT_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub provider_payment_amount: Decimal,
    /// `REV_CNTR_BENE_PMT_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub beneficiary_payment_amount: Decimal,
    /// `REV_CNTR_PMT_AMT_AMT`
    #[serde(deserialize_with = "deserialize_exact")]
    pub payment_amount: Decimal,
}

/// Positive claim line number (`CLM_LINE_NUM`).
pub type LineNumber = NonZeroU32;
