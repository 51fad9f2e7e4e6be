//! Integration tests for the export pipeline.

use std::fs;

use ccw_cli::export::{
    ClaimOutcome, ExportConfig, load_repository, summarize, transform_claims, write_resources,
};
use ccw_cli::report::{Severity, issue_records, write_issue_report};
use ccw_model::{ClaimAggregate, ClaimType, ErrorKind};
use ccw_transform::TransformOptions;
use serde_json::{Value, json};
use tempfile::TempDir;

fn hospice(claim_id: &str) -> Value {
    json!({
        "claimType": "hospice",
        "claimId": claim_id,
        "claimGroupId": "900",
        "beneficiaryId": "567834",
        "nearLineRecordIdCode": "V",
        "claimTypeCode": "50",
        "dateFrom": "2014-01-01",
        "dateThrough": "2014-01-30",
        "providerNumber": "12345",
        "providerStateCode": "AZ",
        "paymentAmount": "130.32",
        "patientStatusCode": "C",
        "utilizationDayCount": 30,
        "claimFacilityTypeCode": "8",
        "claimFrequencyCode": "1",
        "claimServiceClassificationTypeCode": "1",
        "totalChargeAmount": "199.99",
        "primaryPayerPaidAmount": "0",
        "diagnosisPrincipal": {"code": "R5555", "version": "0"},
        "lines": []
    })
}

fn claims(values: Vec<Value>) -> Vec<ClaimAggregate> {
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap())
        .collect()
}

fn inverted_period(claim_id: &str) -> Value {
    let mut value = hospice(claim_id);
    value["dateFrom"] = json!("2014-02-01");
    value
}

fn unmapped_facility(claim_id: &str) -> Value {
    let mut value = hospice(claim_id);
    value["claimFacilityTypeCode"] = json!("Z");
    value
}

fn config(jobs: usize) -> ExportConfig {
    ExportConfig {
        jobs: Some(jobs),
        ..ExportConfig::default()
    }
}

#[test]
fn outcomes_keep_input_order() {
    let owned = claims((1..=40).map(|id| hospice(&id.to_string())).collect());
    let refs: Vec<&ClaimAggregate> = owned.iter().collect();

    let outcomes = transform_claims(&refs, &config(4)).unwrap();

    let ids: Vec<String> = outcomes
        .iter()
        .map(|outcome| match outcome {
            ClaimOutcome::Transformed(transformed) => transformed.resource.id.clone(),
            other => panic!("unexpected outcome: {other:?}"),
        })
        .collect();
    let expected: Vec<String> = (1..=40).map(|id| format!("hospice-{id}")).collect();
    assert_eq!(ids, expected);
}

#[test]
fn failures_are_isolated() {
    let owned = claims(vec![hospice("1"), inverted_period("2"), hospice("3")]);
    let refs: Vec<&ClaimAggregate> = owned.iter().collect();

    let outcomes = transform_claims(&refs, &config(2)).unwrap();
    let result = summarize(&refs, &outcomes);

    let hospice = result.by_type[&ClaimType::Hospice];
    assert_eq!((hospice.claims, hospice.exported, hospice.failed), (3, 2, 1));
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].claim_id, "2");
    assert_eq!(result.failures[0].kind(), ErrorKind::InvalidPeriod);
    assert!(!result.aborted);
}

#[test]
fn strict_mode_turns_warnings_into_failures() {
    let owned = claims(vec![unmapped_facility("1")]);
    let refs: Vec<&ClaimAggregate> = owned.iter().collect();

    let lenient = summarize(&refs, &transform_claims(&refs, &config(1)).unwrap());
    assert_eq!(lenient.warnings.len(), 1);
    assert_eq!(lenient.total().exported, 1);

    let strict_config = ExportConfig {
        options: TransformOptions::strict(),
        ..config(1)
    };
    let strict = summarize(&refs, &transform_claims(&refs, &strict_config).unwrap());
    assert!(strict.warnings.is_empty());
    assert_eq!(strict.failures[0].kind(), ErrorKind::UnmappedCode);
}

#[test]
fn fail_fast_skips_claims_after_a_failure() {
    let mut values = vec![inverted_period("1")];
    values.extend((2..=20).map(|id| hospice(&id.to_string())));
    let owned = claims(values);
    let refs: Vec<&ClaimAggregate> = owned.iter().collect();
    let config = ExportConfig {
        fail_fast: true,
        ..config(1)
    };

    let result = summarize(&refs, &transform_claims(&refs, &config).unwrap());

    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.total().skipped, 19);
    assert!(result.aborted);
}

#[test]
fn resources_are_written_as_json_lines() {
    let owned = claims(vec![hospice("1"), inverted_period("2"), hospice("3")]);
    let refs: Vec<&ClaimAggregate> = owned.iter().collect();
    let outcomes = transform_claims(&refs, &config(2)).unwrap();

    let mut buffer = Vec::new();
    let written = write_resources(&mut buffer, &outcomes).unwrap();

    assert_eq!(written, 2);
    let lines: Vec<Value> = String::from_utf8(buffer)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines[0]["resourceType"], "ExplanationOfBenefit");
    assert_eq!(lines[0]["id"], "hospice-1");
    assert_eq!(lines[1]["id"], "hospice-3");
}

#[test]
fn issue_report_lists_failures_then_warnings() {
    let dir = TempDir::new().unwrap();
    let owned = claims(vec![unmapped_facility("1"), inverted_period("2")]);
    let refs: Vec<&ClaimAggregate> = owned.iter().collect();
    let result = summarize(&refs, &transform_claims(&refs, &config(1)).unwrap());

    let records = issue_records(&result);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].severity, Severity::Error);
    assert_eq!(records[0].claim_id, "2");
    assert_eq!(records[1].severity, Severity::Warning);
    assert_eq!(records[1].kind, "UnmappedCode");

    let path = dir.path().join("issues.csv");
    assert_eq!(write_issue_report(&path, &result).unwrap(), 2);
    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("severity,claim_type,claim_id,kind,field,message")
    );
    assert!(lines.next().unwrap().starts_with("error,hospice,2,InvalidPeriod,"));
    assert!(lines.next().unwrap().starts_with("warning,hospice,1,UnmappedCode,"));
}

#[test]
fn clean_run_writes_header_only_report() {
    let dir = TempDir::new().unwrap();
    let owned = claims(vec![hospice("1")]);
    let refs: Vec<&ClaimAggregate> = owned.iter().collect();
    let result = summarize(&refs, &transform_claims(&refs, &config(1)).unwrap());

    let path = dir.path().join("issues.csv");
    assert_eq!(write_issue_report(&path, &result).unwrap(), 0);
    assert_eq!(
        fs::read_to_string(&path).unwrap().trim_end(),
        "severity,claim_type,claim_id,kind,field,message"
    );
}

#[test]
fn undecodable_line_is_reported_and_the_rest_exported() {
    let dir = TempDir::new().unwrap();
    let mut bad_version = hospice("2");
    bad_version["diagnosisPrincipal"] = json!({"code": "R5555", "version": 0});
    let content = [hospice("1"), bad_version, hospice("3")]
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    let input = dir.path().join("claims.jsonl");
    fs::write(&input, content).unwrap();

    let (repository, rejected) = load_repository(&input).unwrap();
    assert_eq!(repository.len(), 2);
    assert_eq!(rejected.len(), 1);

    let selected: Vec<&ClaimAggregate> = repository.iter().collect();
    let outcomes = transform_claims(&selected, &config(2)).unwrap();
    let mut result = summarize(&selected, &outcomes);
    result.rejected = rejected;

    assert_eq!(result.total().exported, 2);
    assert!(result.has_failures());
    let mut buffer = Vec::new();
    assert_eq!(write_resources(&mut buffer, &outcomes).unwrap(), 2);

    let records = issue_records(&result);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Error);
    assert_eq!(records[0].kind, "InvalidRecord");
    assert_eq!(records[0].claim_id, "2");
    assert!(records[0].message.contains("line 2"), "{}", records[0].message);

    let path = dir.path().join("issues.csv");
    assert_eq!(write_issue_report(&path, &result).unwrap(), 1);
    let report = fs::read_to_string(&path).unwrap();
    assert!(report.lines().nth(1).unwrap().starts_with("error,hospice,2,InvalidRecord,"));
}
