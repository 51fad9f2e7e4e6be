use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use ccw_ingest::RejectedRecord;
use ccw_model::{ClaimType, TransformError};
use ccw_transform::TransformWarning;

/// Counts for one claim type in an export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeSummary {
    pub claims: usize,
    pub exported: usize,
    pub failed: usize,
    pub skipped: usize,
    pub warnings: usize,
}

/// A descriptive code dropped while transforming a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimWarning {
    pub claim_type: ClaimType,
    pub claim_id: String,
    pub warning: TransformWarning,
}

#[derive(Debug, Default)]
pub struct ExportResult {
    pub input: PathBuf,
    /// Resource file, absent when nothing was written.
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub by_type: BTreeMap<ClaimType, TypeSummary>,
    /// Input records that never became claims.
    pub rejected: Vec<RejectedRecord>,
    pub failures: Vec<TransformError>,
    pub warnings: Vec<ClaimWarning>,
    /// Set when `--fail-fast` stopped the run.
    pub aborted: bool,
    pub duration: Duration,
}

impl ExportResult {
    /// True when any claim failed or any input record was rejected.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty() || !self.rejected.is_empty()
    }

    pub fn total(&self) -> TypeSummary {
        self.by_type
            .values()
            .fold(TypeSummary::default(), |acc, summary| TypeSummary {
                claims: acc.claims + summary.claims,
                exported: acc.exported + summary.exported,
                failed: acc.failed + summary.failed,
                skipped: acc.skipped + summary.skipped,
                warnings: acc.warnings + summary.warnings,
            })
    }
}
