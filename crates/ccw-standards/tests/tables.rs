use std::collections::HashSet;

use ccw_model::{ClaimType, FieldError};
use ccw_standards::systems::{self, MedicareSegment};
use ccw_standards::{AdjudicationCategory, CodeRole, lookup, profile};

#[test]
fn closed_tables_have_unique_non_blank_codes() {
    for role in CodeRole::ALL {
        let Some(table) = role.table() else {
            continue;
        };
        let mut seen = HashSet::new();
        for (code, display) in table {
            assert!(!code.trim().is_empty(), "{role}: blank code");
            assert!(!display.trim().is_empty(), "{role}: blank display for {code}");
            assert!(seen.insert(*code), "{role}: duplicate code {code}");
        }
    }
}

#[test]
fn every_table_entry_resolves_to_itself() {
    for role in CodeRole::ALL {
        for (code, display) in role.table().unwrap_or_default() {
            let concept = lookup(role, code).expect("table entry resolves");
            assert_eq!(concept.system, role.system());
            assert_eq!(concept.code, *code);
            assert_eq!(concept.display.as_deref(), Some(*display));
        }
    }
}

#[test]
fn blank_codes_are_format_errors() {
    let err = lookup(CodeRole::FacilityType, " ").unwrap_err();
    assert!(matches!(err, FieldError::InvalidCodeFormat { .. }));
}

#[test]
fn adjudication_order_is_provider_beneficiary_payment() {
    let codes: Vec<_> = AdjudicationCategory::LINE_ORDER
        .iter()
        .map(|category| category.code())
        .collect();
    insta::assert_json_snapshot!(codes, @r###"
    [
      "Provider Payment Amount",
      "Beneficiary Payment Amount",
      "Payment Amount"
    ]
    "###);
}

#[test]
fn references_embed_beneficiary_id() {
    assert_eq!(
        systems::coverage_reference("567834", MedicareSegment::PartA),
        "Coverage/part-a-567834"
    );
    assert_eq!(systems::patient_reference("567834"), "Patient/567834");
}

#[test]
fn outpatient_is_covered_under_part_b() {
    assert_eq!(profile(ClaimType::Outpatient).segment, MedicareSegment::PartB);
}
