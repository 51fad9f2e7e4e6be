mod common;

use ccw_model::eob::{ExtensionValue, TemporalPrecision};
use ccw_model::{ClaimAggregate, DiagnosisRole, ErrorKind, FieldError};
use ccw_standards::systems;
use ccw_transform::{
    ClaimTransformer, CodePolicy, HospiceTransformer, TransformOptions, transform, transform_with,
};
use common::{date, hospice_claim, hospice_line, slots};
use proptest::prelude::*;
use rust_decimal_macros::dec;
use serde_json::json;

fn roles(eob: &ccw_model::ExplanationOfBenefit) -> Vec<(String, Vec<&'static str>)> {
    eob.diagnosis
        .iter()
        .map(|entry| {
            let code = entry.diagnosis.first().unwrap().code.clone();
            let roles = entry
                .types
                .iter()
                .filter_map(|kind| kind.first())
                .map(|coding| role_code(&coding.code))
                .collect();
            (code, roles)
        })
        .collect()
}

fn role_code(code: &str) -> &'static str {
    [
        DiagnosisRole::Principal,
        DiagnosisRole::Additional,
        DiagnosisRole::ExternalCauseFirst,
        DiagnosisRole::ExternalCause,
        DiagnosisRole::ReasonForVisit,
    ]
    .into_iter()
    .map(|role| role.code())
    .find(|candidate| *candidate == code)
    .unwrap()
}

#[test]
fn header_fields_are_mapped() {
    let eob = transform(&hospice_claim().into()).unwrap();

    assert_eq!(eob.id, "hospice-9992");
    assert_eq!(eob.identifier_value(systems::CLAIM_ID), Some("9992"));
    assert_eq!(eob.identifier_value(systems::CLAIM_GROUP_ID), Some("900"));
    assert!(eob.kind.contains(systems::CLAIM_TYPE, "50"));
    assert!(eob.kind.contains(systems::NEAR_LINE_RECORD_ID, "V"));
    assert_eq!(
        eob.insurance.as_ref().unwrap().coverage.reference.as_deref(),
        Some("Coverage/part-a-567834")
    );
    assert_eq!(eob.patient.reference.as_deref(), Some("Patient/567834"));
    assert_eq!(
        eob.provider.as_ref().unwrap().identifier.as_ref().unwrap().value,
        "12345"
    );
    assert_eq!(eob.payment.as_ref().unwrap().amount.value(), dec!(130.32));
    assert_eq!(eob.total_cost.unwrap().value(), dec!(199.99));
    assert!(
        eob.information
            .iter()
            .any(|info| info.category.contains(systems::PATIENT_STATUS, "C"))
    );
}

#[test]
fn output_json_uses_resource_element_names() {
    let eob = transform(&hospice_claim().into()).unwrap();
    let json = serde_json::to_value(&eob).unwrap();

    assert_eq!(json["resourceType"], "ExplanationOfBenefit");
    assert_eq!(json["status"], "active");
    assert_eq!(
        json["payment"]["amount"],
        json!({"value": "130.32", "system": "urn:std:iso:4217", "code": "USD"})
    );
    assert_eq!(
        json["benefitBalance"][0]["financial"][0]["usedUnsignedInt"],
        json!(30)
    );
    assert_eq!(json["item"][0]["locationAddress"]["state"], "AZ");
}

#[test]
fn transform_is_deterministic() {
    let aggregate = ClaimAggregate::from(hospice_claim());
    let first = serde_json::to_vec(&transform(&aggregate).unwrap()).unwrap();
    let second = serde_json::to_vec(&transform(&aggregate).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn billable_period_has_day_precision() {
    let mut claim = hospice_claim();
    claim.date_from = date(2020, 1, 1);
    claim.date_through = date(2020, 1, 10);

    let period = transform(&claim.into()).unwrap().billable_period.unwrap();
    assert_eq!(period.start, Some(date(2020, 1, 1)));
    assert_eq!(period.end, Some(date(2020, 1, 10)));
    assert_eq!(period.precision, TemporalPrecision::Day);
}

#[test]
fn inverted_billable_period_is_rejected() {
    let mut claim = hospice_claim();
    claim.date_from = date(2020, 1, 10);
    claim.date_through = date(2020, 1, 1);

    let err = transform(&claim.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPeriod);
    assert_eq!(err.claim_id, "9992");
    assert_eq!(err.field(), Some("billablePeriod"));
}

#[test]
fn hospice_start_without_discharge_is_an_open_period() {
    let mut claim = hospice_claim();
    claim.beneficiary_discharge_date = None;

    let period = transform(&claim.into()).unwrap().hospitalization.unwrap();
    assert_eq!(period.start, Some(date(2014, 7, 6)));
    assert_eq!(period.end, None);
}

#[test]
fn hospice_period_is_omitted_without_dates() {
    let mut claim = hospice_claim();
    claim.claim_hospice_start_date = None;
    claim.beneficiary_discharge_date = None;

    assert!(transform(&claim.into()).unwrap().hospitalization.is_none());
}

#[test]
fn inverted_hospice_period_is_rejected() {
    let mut claim = hospice_claim();
    claim.claim_hospice_start_date = Some(date(2016, 1, 1));
    claim.beneficiary_discharge_date = Some(date(2015, 1, 1));

    let err = transform(&claim.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPeriod);
    assert_eq!(err.field(), Some("hospicePeriod"));
}

#[test]
fn missing_non_covered_charge_names_field_and_claim() {
    let mut claim = hospice_claim();
    claim.lines[0].revenue.non_covered_charge_amount = None;

    let err = transform(&claim.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
    assert_eq!(err.field(), Some("nonCoveredChargeAmount"));
    assert_eq!(err.claim_id, "9992");
}

#[test]
fn diagnoses_follow_precedence_and_appear_once() {
    let eob = transform(&hospice_claim().into()).unwrap();

    assert_eq!(
        roles(&eob),
        vec![
            ("R5555".to_string(), vec!["principal", "additional"]),
            ("R8888".to_string(), vec!["additional"]),
            ("R9999".to_string(), vec!["additional"]),
            ("R1111".to_string(), vec!["externalFirst", "external"]),
            ("R2222".to_string(), vec!["external"]),
        ]
    );
    let sequences: Vec<u32> = eob.diagnosis.iter().map(|entry| entry.sequence).collect();
    assert_eq!(sequences, [1, 2, 3, 4, 5]);
    assert!(eob.diagnosis[2].diagnosis.contains(systems::ICD_9_CM, "R9999"));
}

#[test]
fn all_additional_slots_produce_twenty_six_entries() {
    let mut claim = hospice_claim();
    let codes: Vec<String> = (1..=25).map(|slot| format!("D{slot:02}")).collect();
    let pairs: Vec<(&str, char)> = codes.iter().map(|code| (code.as_str(), '0')).collect();
    claim.diagnoses = slots(&pairs);
    claim.diagnosis_external_first = Default::default();
    claim.diagnoses_external = Default::default();

    let eob = transform(&claim.into()).unwrap();
    assert_eq!(eob.diagnosis.len(), 26);
    let output: Vec<_> = roles(&eob).into_iter().map(|(code, _)| code).collect();
    assert_eq!(output[0], "R5555");
    assert_eq!(&output[1..], codes.as_slice());
}

#[test]
fn principal_alone_produces_one_entry() {
    let mut claim = hospice_claim();
    claim.diagnoses = Default::default();
    claim.diagnosis_external_first = Default::default();
    claim.diagnoses_external = Default::default();

    let eob = transform(&claim.into()).unwrap();
    assert_eq!(eob.diagnosis.len(), 1);
}

#[test]
fn diagnosis_without_version_fails_the_claim() {
    let mut claim = hospice_claim();
    claim.diagnoses[15].code = Some("R7777".into());
    claim.diagnoses[15].version = None;

    let err = transform(&claim.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DiagnosisVersionMismatch);
    assert_eq!(err.field(), Some("diagnosis16Code"));
}

#[test]
fn every_line_has_three_adjudications_in_order() {
    let mut claim = hospice_claim();
    let mut zero_line = hospice_line(2);
    zero_line.payments.provider_payment_amount = dec!(0);
    zero_line.payments.beneficiary_payment_amount = dec!(0);
    zero_line.payments.payment_amount = dec!(0);
    claim.lines.push(zero_line);

    let eob = transform(&claim.into()).unwrap();
    assert_eq!(eob.item.len(), 2);
    for item in &eob.item {
        assert_eq!(item.adjudication.len(), 3);
    }
    assert!(eob.item[1].adjudication.iter().all(|adj| adj.amount.is_zero()));

    insta::assert_json_snapshot!(eob.item[0].adjudication, @r###"
    [
      {
        "category": {
          "coding": [
            {
              "system": "CMS Adjudications",
              "code": "Provider Payment Amount"
            }
          ]
        },
        "amount": {
          "value": "29.00",
          "system": "urn:std:iso:4217",
          "code": "USD"
        }
      },
      {
        "category": {
          "coding": [
            {
              "system": "CMS Adjudications",
              "code": "Beneficiary Payment Amount"
            }
          ]
        },
        "amount": {
          "value": "28.00",
          "system": "urn:std:iso:4217",
          "code": "USD"
        }
      },
      {
        "category": {
          "coding": [
            {
              "system": "CMS Adjudications",
              "code": "Payment Amount"
            }
          ]
        },
        "amount": {
          "value": "26.00",
          "system": "urn:std:iso:4217",
          "code": "USD"
        }
      }
    ]
    "###);
}

#[test]
fn line_items_keep_order_and_revenue_details() {
    let mut claim = hospice_claim();
    claim.lines.push(hospice_line(2));

    let eob = transform(&claim.into()).unwrap();
    let sequences: Vec<u32> = eob.item.iter().map(|item| item.sequence).collect();
    assert_eq!(sequences, [1, 2]);

    let item = &eob.item[0];
    assert!(item.service.as_ref().unwrap().contains(systems::HCPCS, "651"));
    assert_eq!(item.modifier.len(), 1);
    assert_eq!(item.net.unwrap().value(), dec!(2555.00));
    assert_eq!(item.care_team_link_id, [2]);

    let revenue = item.revenue.as_ref().unwrap();
    assert_eq!(revenue.coding[0].code, "0651");
    let urls: Vec<&str> = revenue.extension.iter().map(|ext| ext.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            systems::NON_COVERED_CHARGE_AMOUNT,
            systems::DEDUCTIBLE_COINSURANCE_CODE
        ]
    );
    let clinical_services = systems::ACT_INVOICE_GROUP_CLINICAL_SERVICES;
    assert!(item.extension.iter().any(|ext| matches!(
        &ext.value,
        ExtensionValue::ValueCoding(coding) if coding.code == clinical_services
    )));
}

#[test]
fn attending_and_rendering_physicians_form_the_care_team() {
    let eob = transform(&hospice_claim().into()).unwrap();
    let npis: Vec<&str> = eob
        .care_team
        .iter()
        .filter_map(|member| member.provider.identifier.as_ref())
        .map(|identifier| identifier.value.as_str())
        .collect();
    assert_eq!(npis, ["8888888888", "345345345"]);
}

#[test]
fn benefit_balance_holds_utilization_and_primary_payer_paid() {
    let eob = transform(&hospice_claim().into()).unwrap();
    assert_eq!(eob.benefit_balance.len(), 1);
    let kinds: Vec<&str> = eob.benefit_balance[0]
        .financial
        .iter()
        .filter_map(|financial| financial.kind.first())
        .map(|coding| coding.code.as_str())
        .collect();
    assert_eq!(kinds, ["System Utilization Day Count", "Primary Payer Paid Amount"]);
}

#[test]
fn unmapped_descriptive_code_warns_under_lenient_policy() {
    let mut claim = hospice_claim();
    claim.institutional.claim_facility_type_code = 'Z';
    let aggregate = ClaimAggregate::from(claim);

    let outcome = transform_with(&aggregate, &TransformOptions::default()).unwrap();
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].field, "claimFacilityTypeCode");
    assert!(outcome.resource.extension(systems::FACILITY_TYPE).is_none());
    assert!(outcome.resource.extension(systems::CLAIM_FREQUENCY).is_some());

    let strict = TransformOptions::new().with_code_policy(CodePolicy::Strict);
    let err = transform_with(&aggregate, &strict).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnmappedCode);
}

#[test]
fn blank_optional_codes_are_treated_as_absent() {
    let mut claim = hospice_claim();
    claim.patient_status_code = Some(' ');
    claim.institutional.claim_non_payment_reason_code = Some(String::new());
    claim.institutional.patient_discharge_status_code = Some("  ".into());
    claim.institutional.attending_physician_npi = Some(String::new());
    claim.lines[0].deductible_coinsurance_code = Some(' ');
    let aggregate = ClaimAggregate::from(claim);

    let strict = TransformOptions::new().with_code_policy(CodePolicy::Strict);
    for options in [TransformOptions::default(), strict] {
        let outcome = transform_with(&aggregate, &options).unwrap();
        assert!(outcome.warnings.is_empty());

        let eob = &outcome.resource;
        assert!(eob.extension(systems::NON_PAYMENT_REASON).is_none());
        assert!(!eob.information.iter().any(|info| {
            info.category.coding.iter().any(|coding| {
                coding.system == systems::PATIENT_STATUS
                    || coding.system == systems::DISCHARGE_STATUS
            })
        }));
        let revenue = eob.item[0].revenue.as_ref().unwrap();
        assert!(
            revenue
                .extension
                .iter()
                .all(|ext| ext.url != systems::DEDUCTIBLE_COINSURANCE_CODE)
        );
    }
}

#[test]
fn unmapped_claim_type_code_is_always_fatal() {
    let mut claim = hospice_claim();
    claim.claim_type_code = "55".into();

    let err = transform(&claim.into()).unwrap_err();
    assert_eq!(err.source, FieldError::unmapped("claimTypeCode", "55"));
}

#[test]
fn negative_payment_is_rejected() {
    let mut claim = hospice_claim();
    claim.payment_amount = dec!(-1.00);

    let err = transform(&claim.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAmount);
    assert_eq!(err.field(), Some("paymentAmount"));
}

#[test]
fn hospice_transformer_rejects_other_claim_types() {
    let aggregate = ClaimAggregate::from(common::outpatient_claim());
    let err = HospiceTransformer
        .transform(&aggregate, &TransformOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedClaimType);
    assert!(err.kind().is_contract_violation());
    assert_eq!(err.claim_id, "1234567890");
}

proptest! {
    #[test]
    fn populated_slots_map_one_to_one(populated in prop::collection::vec(any::<bool>(), 25)) {
        let mut claim = hospice_claim();
        let codes: Vec<String> = (1..=25).map(|slot| format!("P{slot:02}")).collect();
        for (slot, code) in claim.diagnoses.iter_mut().zip(&codes) {
            *slot = Default::default();
            slot.code = Some(code.clone());
            slot.version = Some('0');
        }
        for (slot, keep) in claim.diagnoses.iter_mut().zip(&populated) {
            if !keep {
                *slot = Default::default();
            }
        }
        let expected: Vec<&String> = codes
            .iter()
            .zip(&populated)
            .filter(|(_, keep)| **keep)
            .map(|(code, _)| code)
            .collect();

        let eob = transform(&claim.into()).unwrap();
        let additional: Vec<String> = roles(&eob)
            .into_iter()
            .filter(|(_, roles)| roles == &["additional"])
            .map(|(code, _)| code)
            .collect();
        prop_assert_eq!(additional.iter().collect::<Vec<_>>(), expected);
    }
}
