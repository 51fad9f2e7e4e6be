//! Resource ids and claim identifiers.

use ccw_model::eob::Identifier;
use ccw_model::{ClaimGroupId, ClaimId, ClaimType, ExplanationOfBenefit};
use ccw_standards::systems;

/// Builds the resource id of a claim: the claim type name, a dash and the
/// claim id.
///
/// Claim type names contain no dash, so the id is unique across claim types
/// and [`parse_resource_id`] can split it unambiguously.
pub fn build_resource_id(claim_type: ClaimType, claim_id: &ClaimId) -> String {
    format!("{}-{}", claim_type.as_str(), claim_id.as_str())
}

/// Splits a resource id built by [`build_resource_id`].
pub fn parse_resource_id(id: &str) -> Option<(ClaimType, ClaimId)> {
    let (prefix, rest) = id.split_once('-')?;
    let claim_type = ClaimType::ALL
        .into_iter()
        .find(|claim_type| claim_type.as_str() == prefix)?;
    let claim_id = ClaimId::new(rest).ok().filter(|claim_id| claim_id.as_str() == rest)?;
    Some((claim_type, claim_id))
}

/// Creates the resource with its id and the claim id and claim group id
/// identifiers.
pub fn new_resource(
    claim_type: ClaimType,
    claim_id: &ClaimId,
    claim_group_id: &ClaimGroupId,
) -> ExplanationOfBenefit {
    let mut eob = ExplanationOfBenefit::new(build_resource_id(claim_type, claim_id));
    eob.identifier
        .push(Identifier::new(systems::CLAIM_ID, claim_id.as_str()));
    eob.identifier
        .push(Identifier::new(systems::CLAIM_GROUP_ID, claim_group_id.as_str()));
    eob
}
