//! Provider, organization and care-team references.

use ccw_model::eob::{CareTeam, CodeableConcept, Identifier, Reference, next_sequence};
use ccw_model::{CodedConcept, ExplanationOfBenefit};
use ccw_standards::systems;

use crate::common::non_blank;

/// Role of a care-team member on the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareTeamRole {
    Primary,
    Assist,
    Other,
}

impl CareTeamRole {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Assist => "assist",
            Self::Other => "other",
        }
    }

    fn concept(self) -> CodeableConcept {
        CodeableConcept::of(CodedConcept::new(systems::CARE_TEAM_ROLE, self.code()))
    }
}

/// Attaches the CCW provider number as the resource's provider.
///
/// Absent or blank provider numbers leave the resource untouched.
pub fn assign_provider_number(eob: &mut ExplanationOfBenefit, provider_number: Option<&str>) {
    if let Some(number) = non_blank(provider_number) {
        eob.provider = Some(Reference::by_identifier(Identifier::new(
            systems::PROVIDER_NUMBER,
            number,
        )));
    }
}

/// Attaches the billing organization by NPI.
pub fn assign_organization(eob: &mut ExplanationOfBenefit, npi: Option<&str>) {
    if let Some(npi) = non_blank(npi) {
        eob.organization = Some(Reference::by_identifier(Identifier::new(systems::NPI, npi)));
    }
}

/// Adds a care-team member identified by NPI and returns its sequence.
///
/// A practitioner already on the care team with the same role is reused.
/// Absent or blank NPIs add nothing.
pub fn add_care_team_member(
    eob: &mut ExplanationOfBenefit,
    npi: Option<&str>,
    role: CareTeamRole,
) -> Option<u32> {
    let npi = non_blank(npi)?;
    let role = role.concept();
    if let Some(existing) = eob.care_team.iter().find(|member| {
        member.role.as_ref() == Some(&role)
            && member
                .provider
                .identifier
                .as_ref()
                .is_some_and(|identifier| identifier.value == npi)
    }) {
        return Some(existing.sequence);
    }
    let sequence = next_sequence(eob.care_team.len());
    eob.care_team.push(CareTeam {
        sequence,
        provider: Reference::by_identifier(Identifier::new(systems::NPI, npi)),
        role: Some(role),
    });
    Some(sequence)
}
