//! The claim aggregate sum type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hospice::HospiceClaim;
use crate::ids::{BeneficiaryId, ClaimId};
use crate::outpatient::OutpatientClaim;

/// CCW claim types.
///
/// Every type participates in resource id construction; only the types
/// carried by [`ClaimAggregate`] have transformers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Carrier,
    Dme,
    Hha,
    Hospice,
    Inpatient,
    Outpatient,
    Pde,
    Snf,
}

impl ClaimType {
    pub const ALL: [ClaimType; 8] = [
        Self::Carrier,
        Self::Dme,
        Self::Hha,
        Self::Hospice,
        Self::Inpatient,
        Self::Outpatient,
        Self::Pde,
        Self::Snf,
    ];

    /// Lowercase name, used as the resource id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Carrier => "carrier",
            Self::Dme => "dme",
            Self::Hha => "hha",
            Self::Hospice => "hospice",
            Self::Inpatient => "inpatient",
            Self::Outpatient => "outpatient",
            Self::Pde => "pde",
            Self::Snf => "snf",
        }
    }

    /// Uppercase code used by the `eob-type` coding.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Carrier => "CARRIER",
            Self::Dme => "DME",
            Self::Hha => "HHA",
            Self::Hospice => "HOSPICE",
            Self::Inpatient => "INPATIENT",
            Self::Outpatient => "OUTPATIENT",
            Self::Pde => "PDE",
            Self::Snf => "SNF",
        }
    }

    /// True for claim types billed on institutional (UB-04) claims.
    pub fn is_institutional(&self) -> bool {
        matches!(
            self,
            Self::Hha | Self::Hospice | Self::Inpatient | Self::Outpatient | Self::Snf
        )
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|claim_type| claim_type.as_str() == normalized)
            .ok_or_else(|| format!("Unknown claim type: {s}"))
    }
}

/// One claim header plus its ordered lines, tagged by claim type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "claimType", rename_all = "lowercase")]
pub enum ClaimAggregate {
    Hospice(HospiceClaim),
    Outpatient(OutpatientClaim),
}

impl ClaimAggregate {
    pub fn claim_type(&self) -> ClaimType {
        match self {
            Self::Hospice(_) => ClaimType::Hospice,
            Self::Outpatient(_) => ClaimType::Outpatient,
        }
    }

    pub fn claim_id(&self) -> &ClaimId {
        match self {
            Self::Hospice(claim) => &claim.claim_id,
            Self::Outpatient(claim) => &claim.claim_id,
        }
    }

    pub fn beneficiary_id(&self) -> &BeneficiaryId {
        match self {
            Self::Hospice(claim) => &claim.beneficiary_id,
            Self::Outpatient(claim) => &claim.beneficiary_id,
        }
    }

    pub fn line_count(&self) -> usize {
        match self {
            Self::Hospice(claim) => claim.lines.len(),
            Self::Outpatient(claim) => claim.lines.len(),
        }
    }
}

impl From<HospiceClaim> for ClaimAggregate {
    fn from(claim: HospiceClaim) -> Self {
        Self::Hospice(claim)
    }
}

impl From<OutpatientClaim> for ClaimAggregate {
    fn from(claim: OutpatientClaim) -> Self {
        Self::Outpatient(claim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_type_round_trips_through_str() {
        for claim_type in ClaimType::ALL {
            assert_eq!(claim_type.as_str().parse::<ClaimType>(), Ok(claim_type));
        }
        assert_eq!("HOSPICE".parse::<ClaimType>(), Ok(ClaimType::Hospice));
        assert!("partd".parse::<ClaimType>().is_err());
    }

    #[test]
    fn institutional_types() {
        assert!(ClaimType::Hospice.is_institutional());
        assert!(!ClaimType::Carrier.is_institutional());
        assert!(!ClaimType::Pde.is_institutional());
    }
}
