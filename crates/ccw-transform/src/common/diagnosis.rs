//! Diagnosis extraction.
//!
//! CCW records spread diagnoses over fixed, positionally numbered
//! (code, version) slot pairs. Each claim type describes its slots with a
//! small ordered table of [`SlotRange`]s; one generic routine walks the
//! table, so the slot layout lives in data rather than in call sites.

use ccw_model::eob::{CodeableConcept, Diagnosis, Extension, next_sequence};
use ccw_model::{
    CodeSlot, CodedConcept, DiagnosisRole, ExplanationOfBenefit, IcdVersion, Result,
    VersionedDiagnosisCode,
};
use ccw_standards::systems;

/// A run of consecutive diagnosis slots sharing one role.
pub struct SlotRange<C> {
    /// Field name stem used in error reports.
    pub field: &'static str,
    /// Number of the first slot, or `None` for a single unnumbered slot.
    pub first_slot: Option<usize>,
    pub role: DiagnosisRole,
    pub slots: fn(&C) -> &[CodeSlot],
}

impl<C> SlotRange<C> {
    fn slot_field(&self, offset: usize) -> String {
        match self.first_slot {
            Some(first) => format!("{}{}Code", self.field, first + offset),
            None => format!("{}Code", self.field),
        }
    }
}

/// A validated diagnosis together with the role its slot carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDiagnosis {
    pub code: VersionedDiagnosisCode,
    pub role: DiagnosisRole,
}

/// Walks the slot table of a claim in table order.
///
/// Empty slots are skipped. A populated slot without a resolvable version
/// yields [`ccw_model::FieldError::DiagnosisVersionMismatch`]. The iterator
/// is lazy, finite and can be restarted by cloning it before use.
pub fn extract_diagnoses<'a, C>(
    claim: &'a C,
    ranges: &'a [SlotRange<C>],
) -> impl Iterator<Item = Result<ExtractedDiagnosis>> + Clone + 'a {
    ranges.iter().flat_map(move |range| {
        (range.slots)(claim)
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_populated())
            .filter_map(move |(offset, slot)| {
                slot.resolve(&range.slot_field(offset))
                    .transpose()
                    .map(|code| {
                        code.map(|code| ExtractedDiagnosis {
                            code,
                            role: range.role,
                        })
                    })
            })
    })
}

/// Adds an extracted diagnosis to the resource.
///
/// CCW repeats some codes across ranges (the principal diagnosis usually
/// reappears in slot 1). A code already on the resource gains the new role
/// instead of a second entry, so each code appears once, at the position
/// of its highest-precedence slot.
pub fn add_diagnosis(eob: &mut ExplanationOfBenefit, diagnosis: ExtractedDiagnosis) {
    let concept = diagnosis_concept(&diagnosis.code);
    let role = role_concept(diagnosis.role);

    if let Some(existing) = eob
        .diagnosis
        .iter_mut()
        .find(|entry| entry.diagnosis.contains(&concept.system, &concept.code))
    {
        if !existing.types.contains(&role) {
            existing.types.push(role);
        }
        return;
    }

    let extension = diagnosis
        .code
        .present_on_admission
        .map(|indicator| {
            Extension::coding(
                systems::PRESENT_ON_ADMISSION,
                CodedConcept::new(systems::PRESENT_ON_ADMISSION, indicator.to_string()),
            )
        })
        .into_iter()
        .collect();
    let sequence = next_sequence(eob.diagnosis.len());
    eob.diagnosis.push(Diagnosis {
        sequence,
        diagnosis: CodeableConcept::of(concept),
        types: vec![role],
        extension,
    });
}

/// Extracts every slot of `ranges` and adds it to the resource.
pub fn attach_diagnoses<C>(
    eob: &mut ExplanationOfBenefit,
    claim: &C,
    ranges: &[SlotRange<C>],
) -> Result<()> {
    for diagnosis in extract_diagnoses(claim, ranges) {
        add_diagnosis(eob, diagnosis?);
    }
    Ok(())
}

fn diagnosis_concept(code: &VersionedDiagnosisCode) -> CodedConcept {
    let system = match code.version {
        IcdVersion::Icd9 => systems::ICD_9_CM,
        IcdVersion::Icd10 => systems::ICD_10,
    };
    CodedConcept::new(system, code.code.as_str())
}

fn role_concept(role: DiagnosisRole) -> CodeableConcept {
    CodeableConcept::of(
        CodedConcept::new(systems::DIAGNOSIS_TYPE, role.code()).with_display(role.display()),
    )
}
