//! ICD procedure extraction.

use ccw_model::eob::{CodeableConcept, Procedure, next_sequence};
use ccw_model::{
    CodedConcept, ExplanationOfBenefit, IcdVersion, ProcedureSlot, Result, VersionedProcedureCode,
};
use ccw_standards::systems;

/// Walks numbered procedure slots starting at slot 1, skipping empty ones.
pub fn extract_procedures<'a>(
    field: &'a str,
    slots: &'a [ProcedureSlot],
) -> impl Iterator<Item = Result<VersionedProcedureCode>> + Clone + 'a {
    slots
        .iter()
        .enumerate()
        .filter_map(move |(offset, slot)| {
            slot.resolve(&format!("{field}{}Code", offset + 1)).transpose()
        })
}

pub fn attach_procedures(
    eob: &mut ExplanationOfBenefit,
    field: &str,
    slots: &[ProcedureSlot],
) -> Result<()> {
    for procedure in extract_procedures(field, slots) {
        let procedure = procedure?;
        let system = match procedure.version {
            IcdVersion::Icd9 => systems::ICD_9_PROCEDURE,
            IcdVersion::Icd10 => systems::ICD_10_PROCEDURE,
        };
        let sequence = next_sequence(eob.procedure.len());
        eob.procedure.push(Procedure {
            sequence,
            date: procedure.date,
            procedure: CodeableConcept::of(CodedConcept::new(system, procedure.code)),
        });
    }
    Ok(())
}
