//! Raw CCW code tables.
//!
//! Each [`CodeRole`] names one coded column and knows the system its values
//! belong to. Closed code sets carry a table of known codes with their
//! codebook descriptions; open sets (revenue centers, non-payment reasons)
//! accept any non-blank value.

use std::fmt;

use ccw_model::{CodedConcept, FieldError, Result, normalize_code};

use crate::systems;

/// The coded column a raw value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeRole {
    ClaimTypeCode,
    NearLineRecordId,
    FacilityType,
    ClaimFrequency,
    NonPaymentReason,
    DischargeStatus,
    ServiceClassification,
    PrimaryPayer,
    PatientStatus,
    DeductibleCoinsurance,
    RevenueCenter,
}

impl CodeRole {
    pub const ALL: [CodeRole; 11] = [
        Self::ClaimTypeCode,
        Self::NearLineRecordId,
        Self::FacilityType,
        Self::ClaimFrequency,
        Self::NonPaymentReason,
        Self::DischargeStatus,
        Self::ServiceClassification,
        Self::PrimaryPayer,
        Self::PatientStatus,
        Self::DeductibleCoinsurance,
        Self::RevenueCenter,
    ];

    /// Record field the role is read from; used in error reports.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ClaimTypeCode => "claimTypeCode",
            Self::NearLineRecordId => "nearLineRecordIdCode",
            Self::FacilityType => "claimFacilityTypeCode",
            Self::ClaimFrequency => "claimFrequencyCode",
            Self::NonPaymentReason => "claimNonPaymentReasonCode",
            Self::DischargeStatus => "patientDischargeStatusCode",
            Self::ServiceClassification => "claimServiceClassificationTypeCode",
            Self::PrimaryPayer => "claimPrimaryPayerCode",
            Self::PatientStatus => "patientStatusCode",
            Self::DeductibleCoinsurance => "deductibleCoinsuranceCode",
            Self::RevenueCenter => "revenueCenterCode",
        }
    }

    pub const fn system(&self) -> &'static str {
        match self {
            Self::ClaimTypeCode => systems::CLAIM_TYPE,
            Self::NearLineRecordId => systems::NEAR_LINE_RECORD_ID,
            Self::FacilityType => systems::FACILITY_TYPE,
            Self::ClaimFrequency => systems::CLAIM_FREQUENCY,
            Self::NonPaymentReason => systems::NON_PAYMENT_REASON,
            Self::DischargeStatus => systems::DISCHARGE_STATUS,
            Self::ServiceClassification => systems::SERVICE_CLASSIFICATION,
            Self::PrimaryPayer => systems::PRIMARY_PAYER,
            Self::PatientStatus => systems::PATIENT_STATUS,
            Self::DeductibleCoinsurance => systems::DEDUCTIBLE_COINSURANCE_CODE,
            Self::RevenueCenter => systems::REVENUE_CENTER,
        }
    }

    /// Whether the role takes part in classifying or identifying the claim.
    ///
    /// An unmapped value in such a role always fails the claim; other roles
    /// are descriptive and may be dropped with a warning.
    pub const fn is_identifier_bearing(&self) -> bool {
        matches!(self, Self::ClaimTypeCode | Self::NearLineRecordId)
    }

    /// Known codes and descriptions; `None` for open code sets.
    pub fn table(&self) -> Option<&'static [(&'static str, &'static str)]> {
        match self {
            Self::ClaimTypeCode => Some(CLAIM_TYPE_CODES),
            Self::NearLineRecordId => Some(NEAR_LINE_RECORD_IDS),
            Self::FacilityType => Some(FACILITY_TYPES),
            Self::ClaimFrequency => Some(CLAIM_FREQUENCIES),
            Self::DischargeStatus => Some(DISCHARGE_STATUSES),
            Self::ServiceClassification => Some(SERVICE_CLASSIFICATIONS),
            Self::PrimaryPayer => Some(PRIMARY_PAYERS),
            Self::PatientStatus => Some(PATIENT_STATUSES),
            Self::DeductibleCoinsurance => Some(DEDUCTIBLE_COINSURANCE),
            Self::NonPaymentReason | Self::RevenueCenter => None,
        }
    }
}

impl fmt::Display for CodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Maps a raw code of `role` to its coded concept.
///
/// Blank values fail with [`FieldError::InvalidCodeFormat`]; values outside
/// a closed code set fail with [`FieldError::UnmappedCode`].
pub fn lookup(role: CodeRole, raw: &str) -> Result<CodedConcept> {
    let concept = normalize_code(role.field(), raw, role.system())?;
    let Some(table) = role.table() else {
        return Ok(concept);
    };
    table
        .iter()
        .find(|(code, _)| *code == concept.code)
        .map(|(_, display)| concept.clone().with_display(*display))
        .ok_or_else(|| FieldError::unmapped(role.field(), concept.code))
}

// =============================================================================
// Tables
// =============================================================================

const CLAIM_TYPE_CODES: &[(&str, &str)] = &[
    ("10", "HHA claim"),
    ("20", "Non swing bed Skilled Nursing Facility (SNF) claim"),
    ("30", "Swing bed SNF claim"),
    ("40", "Outpatient claim"),
    ("50", "Hospice claim"),
    ("60", "Inpatient claim"),
    ("61", "Inpatient 'Full-Encounter' claim"),
    ("62", "Medicare Advantage IME/GME claims"),
    ("63", "Medicare Advantage (no-pay) claims"),
    ("64", "Medicare Advantage (paid as FFS) claim"),
    ("71", "RIC O local carrier non-DMEPOS claim"),
    ("72", "RIC O local carrier DMEPOS claim"),
    ("81", "RIC M DMERC non-DMEPOS claim"),
    ("82", "RIC M DMERC DMEPOS claim"),
];

const NEAR_LINE_RECORD_IDS: &[(&str, &str)] = &[
    ("M", "Part B DMEPOS claim record (processed by DME Regional Carrier)"),
    ("O", "Part B physician/supplier claim record (processed by local carriers)"),
    ("U", "Both Part A and B institutional home health agency (HHA) claim records"),
    ("V", "Part A institutional claim record (inpatient, SNF, christian science, HHA or hospice)"),
    ("W", "Part B institutional claim record (outpatient, HHA)"),
];

const FACILITY_TYPES: &[(&str, &str)] = &[
    ("1", "Hospital"),
    ("2", "Skilled nursing facility (SNF)"),
    ("3", "Home health agency (HHA)"),
    ("4", "Religious Nonmedical (Hospital)"),
    ("5", "Religious Nonmedical (Extended Care)"),
    ("6", "Intermediate care"),
    ("7", "Clinic or hospital-based renal dialysis facility"),
    ("8", "Special facility or ASC surgery"),
    ("9", "Reserved"),
];

const CLAIM_FREQUENCIES: &[(&str, &str)] = &[
    ("0", "Non-payment/zero claims"),
    ("1", "Admit thru discharge claim"),
    ("2", "Interim - first claim"),
    ("3", "Interim - continuing claim"),
    ("4", "Interim - last claim"),
    ("5", "Late charge(s) only claim"),
    ("7", "Replacement of prior claim"),
    ("8", "Void/cancel prior claim"),
    ("9", "Final claim"),
    ("A", "Admission notice"),
    ("B", "Hospice termination/revocation notice"),
    ("C", "Hospice change of provider notice"),
    ("D", "Hospice election void"),
    ("E", "Hospice change of ownership"),
    ("F", "Beneficiary initiated adjustment claim"),
    ("G", "CWF generated adjustment claim"),
    ("H", "CMS generated adjustment claim"),
    ("I", "Miscellaneous adjustment claim"),
    ("J", "Other adjustment request"),
    ("M", "MSP initiated adjustment claim"),
    ("P", "PRO adjustment claim"),
];

const DISCHARGE_STATUSES: &[(&str, &str)] = &[
    ("0", "Unknown value"),
    ("01", "Discharged to home/self care"),
    ("02", "Discharged/transferred to other short term general hospital for inpatient care"),
    ("03", "Discharged/transferred to skilled nursing facility (SNF)"),
    ("04", "Discharged/transferred to intermediate care facility (ICF)"),
    ("05", "Discharged/transferred to another type of institution for inpatient care"),
    ("06", "Discharged/transferred to home care of organized home health service organization"),
    ("07", "Left against medical advice or discontinued care"),
    ("08", "Discharged/transferred to home under care of a home IV drug therapy provider"),
    ("09", "Admitted as an inpatient to this hospital"),
    ("20", "Expired"),
    ("21", "Discharged/transferred to court/law enforcement"),
    ("30", "Still patient"),
    ("40", "Expired at home (hospice claims only)"),
    ("41", "Expired in a medical facility (hospice claims only)"),
    ("42", "Expired - place unknown (hospice claims only)"),
    ("43", "Discharged/transferred to a federal hospital"),
    ("50", "Discharged/transferred to a hospice - home"),
    ("51", "Discharged/transferred to a hospice - medical facility"),
    ("61", "Discharged/transferred within this institution to a hospital-based swing bed"),
    ("62", "Discharged/transferred to an inpatient rehabilitation facility"),
    ("63", "Discharged/transferred to a long term care hospital"),
    ("64", "Discharged/transferred to a nursing facility certified under Medicaid"),
    ("65", "Discharged/transferred to a psychiatric hospital or psychiatric distinct part unit"),
    ("66", "Discharged/transferred to a critical access hospital"),
    ("70", "Discharged/transferred to another type of health care institution"),
];

const SERVICE_CLASSIFICATIONS: &[(&str, &str)] = &[
    ("1", "Inpatient"),
    ("2", "Inpatient or Home Health (covered on Part B)"),
    ("3", "Outpatient"),
    ("4", "Other (Part B)"),
    ("5", "Intermediate care - level I"),
    ("6", "Intermediate care - level II"),
    ("7", "Subacute inpatient"),
    ("8", "Swing bed"),
    ("9", "Reserved"),
];

const PRIMARY_PAYERS: &[(&str, &str)] = &[
    ("A", "Working aged beneficiary or spouse with employer group health plan (EGHP)"),
    ("B", "End stage renal disease (ESRD) beneficiary in the 30 month coordination period with an EGHP"),
    ("C", "Conditional payment by Medicare; future reimbursement expected"),
    ("D", "Automobile no-fault"),
    ("E", "Workers' compensation"),
    ("F", "Public Health Service or other federal agency"),
    ("G", "Working disabled beneficiary under age 65 with a large group health plan"),
    ("H", "Black Lung"),
    ("I", "Veterans Administration"),
    ("L", "Any liability insurance"),
    ("M", "Override code: EGHP services involved"),
    ("N", "Override code: non-EGHP services involved"),
];

const PATIENT_STATUSES: &[(&str, &str)] = &[
    ("A", "Discharged"),
    ("B", "Died"),
    ("C", "Still a patient"),
];

const DEDUCTIBLE_COINSURANCE: &[(&str, &str)] = &[
    ("0", "Charges are subject to deductible and coinsurance"),
    ("1", "Charges are not subject to deductible"),
    ("2", "Charges are not subject to coinsurance"),
    ("3", "Charges are not subject to deductible or coinsurance"),
    ("4", "No charge or units associated with this revenue center code"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_table_adds_display() {
        let concept = lookup(CodeRole::PatientStatus, "C").unwrap();
        assert_eq!(concept.system, systems::PATIENT_STATUS);
        assert_eq!(concept.display.as_deref(), Some("Still a patient"));
    }

    #[test]
    fn unknown_code_is_unmapped() {
        let err = lookup(CodeRole::ClaimTypeCode, "99").unwrap_err();
        assert_eq!(err, FieldError::unmapped("claimTypeCode", "99"));
    }

    #[test]
    fn open_set_passes_code_through() {
        let concept = lookup(CodeRole::RevenueCenter, " 0651 ").unwrap();
        assert_eq!(concept.code, "0651");
        assert!(concept.display.is_none());
    }

    #[test]
    fn only_classification_roles_are_identifier_bearing() {
        let bearing: Vec<_> = CodeRole::ALL
            .iter()
            .filter(|role| role.is_identifier_bearing())
            .collect();
        assert_eq!(bearing, [&CodeRole::ClaimTypeCode, &CodeRole::NearLineRecordId]);
    }
}
