//! Claim type classification.

use ccw_model::{ClaimType, CodedConcept, Result};
use ccw_standards::{CodeRole, lookup, profile};

use crate::common::require;

/// Builds the type classifications of a claim.
///
/// CCW spreads the classification over two fields: the near-line record
/// identification code (which file family the record came from) and the
/// claim type code. Claim types that carry them must supply both, and both
/// must be known codes. The result always starts with the `eob-type` and
/// FHIR claim type codings.
pub fn map_claim_type(
    claim_type: ClaimType,
    near_line_record_id_code: Option<char>,
    claim_type_code: Option<&str>,
) -> Result<Vec<CodedConcept>> {
    let profile = profile(claim_type);
    let mut codings = vec![
        profile.eob_type_coding(),
        profile.fhir_claim_type.coding(),
    ];
    if profile.has_classification_codes {
        let near_line = require(near_line_record_id_code, CodeRole::NearLineRecordId.field())?;
        let claim_type_code = require(claim_type_code, CodeRole::ClaimTypeCode.field())?;
        codings.push(lookup(
            CodeRole::NearLineRecordId,
            near_line.encode_utf8(&mut [0; 4]),
        )?);
        codings.push(lookup(CodeRole::ClaimTypeCode, claim_type_code)?);
    }
    Ok(codings)
}

#[cfg(test)]
mod tests {
    use ccw_model::FieldError;
    use ccw_standards::systems;

    use super::*;

    #[test]
    fn hospice_carries_four_classifications() {
        let codings = map_claim_type(ClaimType::Hospice, Some('V'), Some("50")).unwrap();
        let systems: Vec<_> = codings.iter().map(|coding| coding.system.as_str()).collect();
        assert_eq!(
            systems,
            [
                systems::EOB_TYPE,
                systems::FHIR_CLAIM_TYPE,
                systems::NEAR_LINE_RECORD_ID,
                systems::CLAIM_TYPE
            ]
        );
        assert_eq!(codings[3].display.as_deref(), Some("Hospice claim"));
    }

    #[test]
    fn missing_near_line_code_is_required() {
        let err = map_claim_type(ClaimType::Hospice, None, Some("50")).unwrap_err();
        assert_eq!(err, FieldError::missing("nearLineRecordIdCode"));
    }

    #[test]
    fn unknown_claim_type_code_is_fatal() {
        let err = map_claim_type(ClaimType::Hospice, Some('V'), Some("5")).unwrap_err();
        assert_eq!(err, FieldError::unmapped("claimTypeCode", "5"));
    }

    #[test]
    fn pharmacy_claims_have_no_classification_codes() {
        let codings = map_claim_type(ClaimType::Pde, None, None).unwrap();
        assert_eq!(codings.len(), 2);
    }
}
