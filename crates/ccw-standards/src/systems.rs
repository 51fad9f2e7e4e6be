//! Coding-system and identifier-system URIs.

pub use ccw_model::money::{CURRENCY_SYSTEM, USD};

// =============================================================================
// Identifiers
// =============================================================================

pub const CLAIM_ID: &str = "http://bluebutton.cms.hhs.gov/identifier#claimId";
pub const CLAIM_GROUP_ID: &str = "http://bluebutton.cms.hhs.gov/identifier#claimGroupId";
pub const PROVIDER_NUMBER: &str = "http://bluebutton.cms.hhs.gov/identifier#providerNumber";
pub const NPI: &str = "http://hl7.org/fhir/sid/us-npi";

// =============================================================================
// Claim classification
// =============================================================================

pub const EOB_TYPE: &str = "https://bluebutton.cms.gov/resources/codesystem/eob-type";
pub const FHIR_CLAIM_TYPE: &str = "http://hl7.org/fhir/ex-claimtype";
pub const CLAIM_TYPE: &str = "http://bluebutton.cms.hhs.gov/coding#claimTypeCd";
pub const NEAR_LINE_RECORD_ID: &str = "http://bluebutton.cms.hhs.gov/coding#nearLineRecordIdCd";

// =============================================================================
// Descriptive claim codes
// =============================================================================

pub const PATIENT_STATUS: &str = "http://bluebutton.cms.hhs.gov/coding#patientStatusCd";
pub const FACILITY_TYPE: &str = "http://bluebutton.cms.hhs.gov/coding#claimFacilityTypeCd";
pub const CLAIM_FREQUENCY: &str = "http://bluebutton.cms.hhs.gov/coding#claimFrequencyCd";
pub const NON_PAYMENT_REASON: &str = "http://bluebutton.cms.hhs.gov/coding#claimNonPaymentReasonCd";
pub const DISCHARGE_STATUS: &str = "http://bluebutton.cms.hhs.gov/coding#patientDischargeStatusCd";
pub const SERVICE_CLASSIFICATION: &str =
    "http://bluebutton.cms.hhs.gov/coding#claimServiceClassificationTypeCd";
pub const PRIMARY_PAYER: &str = "http://bluebutton.cms.hhs.gov/coding#primaryPayerCd";
pub const REVENUE_CENTER: &str = "http://bluebutton.cms.hhs.gov/coding#revenueCenterCd";
pub const NDC_QUANTITY_QUALIFIER: &str =
    "http://bluebutton.cms.hhs.gov/coding#revenueCenterNdcQuantityQualifierCd";

// =============================================================================
// Clinical codes
// =============================================================================

pub const HCPCS: &str = "https://www.cms.gov/Medicare/Coding/MedHCPCSGenInfo/index.html";
pub const ICD_9_CM: &str = "http://hl7.org/fhir/sid/icd-9-cm";
pub const ICD_10: &str = "http://hl7.org/fhir/sid/icd-10";
pub const ICD_9_PROCEDURE: &str = "http://hl7.org/fhir/sid/icd-9-cm-procedure";
pub const ICD_10_PROCEDURE: &str = "http://www.cms.gov/Medicare/Coding/ICD10";
pub const NDC: &str = "http://hl7.org/fhir/sid/ndc";
pub const DIAGNOSIS_TYPE: &str = "http://bluebutton.cms.hhs.gov/coding#diagnosisType";
pub const PRESENT_ON_ADMISSION: &str =
    "http://bluebutton.cms.hhs.gov/extensions#diagnosisPresentOnAdmissionCd";

// =============================================================================
// Benefit balances, adjudications and line markers
// =============================================================================

pub const BENEFIT_CATEGORY: &str = "http://build.fhir.org/explanationofbenefit-definitions.html#ExplanationOfBenefit.benefitBalance.category";
pub const BENEFIT_BALANCE_TYPE: &str = "http://bluebutton.cms.hhs.gov/coding#benefitBalanceType";
pub const ADJUDICATION_CATEGORY: &str = "CMS Adjudications";
pub const ACT_INVOICE_GROUP: &str = "http://hl7.org/fhir/ValueSet/v3-ActInvoiceGroupCode";
pub const ACT_INVOICE_GROUP_CLINICAL_SERVICES: &str = "CSPINV";
pub const CARE_TEAM_ROLE: &str = "http://hl7.org/fhir/claimcareteamrole";

// =============================================================================
// Extensions
// =============================================================================

pub const DEDUCTIBLE_COINSURANCE_CODE: &str =
    "http://bluebutton.cms.hhs.gov/extensions#revCntrDdctblCoinsrncCd";
pub const NON_COVERED_CHARGE_AMOUNT: &str =
    "http://bluebutton.cms.hhs.gov/extensions#revCntrNcvrdChrgAmt";
pub const NDC_QUANTITY: &str = "http://bluebutton.cms.hhs.gov/extensions#revCntrNdcQty";
pub const BLOOD_DEDUCTIBLE_AMOUNT: &str =
    "http://bluebutton.cms.hhs.gov/extensions#revCntrBloodDdctblAmt";
pub const CASH_DEDUCTIBLE_AMOUNT: &str =
    "http://bluebutton.cms.hhs.gov/extensions#revCntrCashDdctblAmt";
pub const WAGE_ADJUSTED_COINSURANCE_AMOUNT: &str =
    "http://bluebutton.cms.hhs.gov/extensions#revCntrCoinsrncWgeAdjstdAmt";
pub const REDUCED_COINSURANCE_AMOUNT: &str =
    "http://bluebutton.cms.hhs.gov/extensions#revCntrRdcdCoinsrncAmt";
pub const PATIENT_RESPONSIBILITY_AMOUNT: &str =
    "http://bluebutton.cms.hhs.gov/extensions#revCntrPtntRspnsbltyPmt";

// =============================================================================
// References
// =============================================================================

/// Medicare coverage segment a claim is paid under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicareSegment {
    PartA,
    PartB,
}

impl MedicareSegment {
    pub const fn url_prefix(&self) -> &'static str {
        match self {
            Self::PartA => "part-a",
            Self::PartB => "part-b",
        }
    }
}

/// Reference to the coverage resource of a beneficiary's segment.
pub fn coverage_reference(beneficiary_id: &str, segment: MedicareSegment) -> String {
    format!("Coverage/{}-{}", segment.url_prefix(), beneficiary_id)
}

pub fn patient_reference(beneficiary_id: &str) -> String {
    format!("Patient/{beneficiary_id}")
}
