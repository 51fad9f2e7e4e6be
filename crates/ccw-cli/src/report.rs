//! CSV report of rejected records, failed claims and dropped codes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use ccw_ingest::{IngestError, RejectedRecord};
use ccw_model::ErrorKind;

use crate::types::ExportResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One row of the issue report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IssueRecord {
    pub severity: Severity,
    /// Blank when a rejected record carried no readable claim type.
    pub claim_type: String,
    pub claim_id: String,
    pub kind: String,
    pub field: Option<String>,
    pub message: String,
}

/// Report rows: rejected records, then failures, then warnings, each in
/// input order.
pub fn issue_records(result: &ExportResult) -> Vec<IssueRecord> {
    let rejected = result.rejected.iter().map(rejected_record);
    let failures = result.failures.iter().map(|error| IssueRecord {
        severity: Severity::Error,
        claim_type: error.claim_type.to_string(),
        claim_id: error.claim_id.clone(),
        kind: error.kind().to_string(),
        field: error.field().map(str::to_string),
        message: error.source.to_string(),
    });
    let warnings = result.warnings.iter().map(|warning| IssueRecord {
        severity: Severity::Warning,
        claim_type: warning.claim_type.to_string(),
        claim_id: warning.claim_id.clone(),
        kind: ErrorKind::UnmappedCode.to_string(),
        field: Some(warning.warning.field.clone()),
        message: warning.warning.to_string(),
    });
    rejected.chain(failures).chain(warnings).collect()
}

fn rejected_record(record: &RejectedRecord) -> IssueRecord {
    let kind = match &record.error {
        IngestError::DuplicateClaim { .. } => "DuplicateClaim",
        _ => "InvalidRecord",
    };
    IssueRecord {
        severity: Severity::Error,
        claim_type: record.claim_type.clone().unwrap_or_default(),
        claim_id: record.claim_id.clone().unwrap_or_default(),
        kind: kind.to_string(),
        field: None,
        message: record.error.to_string(),
    }
}

/// Write the issue report. The file holds only a header when the run was clean.
pub fn write_issue_report(path: &Path, result: &ExportResult) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create report {}", path.display()))?;
    let records = issue_records(result);
    if records.is_empty() {
        writer.write_record(["severity", "claim_type", "claim_id", "kind", "field", "message"])?;
    }
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(records.len())
}
