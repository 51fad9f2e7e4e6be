//! Per-claim-type classification profiles.

use ccw_model::{ClaimType, CodedConcept};

use crate::systems::{self, MedicareSegment};

/// FHIR claim category a CCW claim type falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FhirClaimType {
    Institutional,
    Professional,
    Pharmacy,
}

impl FhirClaimType {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Institutional => "institutional",
            Self::Professional => "professional",
            Self::Pharmacy => "pharmacy",
        }
    }

    pub fn coding(&self) -> CodedConcept {
        CodedConcept::new(systems::FHIR_CLAIM_TYPE, self.code())
    }
}

/// Static facts about one claim type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimTypeProfile {
    pub claim_type: ClaimType,
    pub fhir_claim_type: FhirClaimType,
    pub segment: MedicareSegment,
    /// Whether records of this type carry the near-line and claim type codes.
    pub has_classification_codes: bool,
}

impl ClaimTypeProfile {
    /// Coding of the claim type in the bulk-data EOB type system.
    pub fn eob_type_coding(&self) -> CodedConcept {
        CodedConcept::new(systems::EOB_TYPE, self.claim_type.code())
    }
}

pub fn profile(claim_type: ClaimType) -> ClaimTypeProfile {
    let (fhir_claim_type, segment, has_classification_codes) = match claim_type {
        ClaimType::Carrier | ClaimType::Dme => {
            (FhirClaimType::Professional, MedicareSegment::PartB, true)
        }
        ClaimType::Outpatient => (FhirClaimType::Institutional, MedicareSegment::PartB, true),
        ClaimType::Hha | ClaimType::Hospice | ClaimType::Inpatient | ClaimType::Snf => {
            (FhirClaimType::Institutional, MedicareSegment::PartA, true)
        }
        ClaimType::Pde => (FhirClaimType::Pharmacy, MedicareSegment::PartB, false),
    };
    ClaimTypeProfile {
        claim_type,
        fhir_claim_type,
        segment,
        has_classification_codes,
    }
}
