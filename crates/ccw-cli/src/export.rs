//! Claim loading, parallel transformation and resource writing.

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use ccw_ingest::{InMemoryRepository, RejectedRecord, load_claims};
use ccw_model::{ClaimAggregate, TransformError};
use ccw_transform::{TransformOptions, TransformOutcome, transform_with};

use crate::types::{ClaimWarning, ExportResult};

/// Settings for one export run.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Worker threads. `None` uses one per available core.
    pub jobs: Option<usize>,
    pub options: TransformOptions,
    /// Stop scheduling claims after the first failure.
    pub fail_fast: bool,
    pub show_progress: bool,
}

/// Result of transforming one claim.
#[derive(Debug)]
pub enum ClaimOutcome {
    Transformed(TransformOutcome),
    Failed(TransformError),
    /// Not attempted because an earlier failure stopped the run.
    Skipped,
}

/// Load and index a claim file.
///
/// Records that fail to decode, and repeated claims, are returned beside the
/// repository so the run can report them and carry on.
pub fn load_repository(input: &Path) -> Result<(InMemoryRepository, Vec<RejectedRecord>)> {
    let batch =
        load_claims(input).with_context(|| format!("load claims from {}", input.display()))?;
    let records = batch.records();
    let (repository, rejected) = batch.into_repository();
    if !rejected.is_empty() {
        warn!(
            records,
            rejected = rejected.len(),
            "some input records were rejected"
        );
    }
    Ok((repository, rejected))
}

/// Transform claims on a dedicated worker pool.
///
/// Outcomes are returned in input order regardless of completion order.
pub fn transform_claims(
    claims: &[&ClaimAggregate],
    config: &ExportConfig,
) -> Result<Vec<ClaimOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs.unwrap_or(0))
        .thread_name(|index| format!("ccw-export-{index}"))
        .build()
        .context("build worker pool")?;
    debug!(workers = pool.current_num_threads(), "worker pool ready");

    let progress = progress_bar(claims.len(), config.show_progress);
    let abort = AtomicBool::new(false);
    let start = Instant::now();

    let outcomes: Vec<ClaimOutcome> = pool.install(|| {
        claims
            .par_iter()
            .map(|claim| {
                let outcome = transform_one(claim, config, &abort);
                progress.inc(1);
                outcome
            })
            .collect()
    });
    progress.finish_and_clear();

    info!(
        claims = claims.len(),
        duration_ms = start.elapsed().as_millis(),
        "transformation complete"
    );
    Ok(outcomes)
}

fn transform_one(
    claim: &ClaimAggregate,
    config: &ExportConfig,
    abort: &AtomicBool,
) -> ClaimOutcome {
    if config.fail_fast && abort.load(Ordering::Relaxed) {
        return ClaimOutcome::Skipped;
    }
    match transform_with(claim, &config.options) {
        Ok(outcome) => ClaimOutcome::Transformed(outcome),
        Err(error) => {
            warn!(
                claim_id = %error.claim_id,
                claim_type = %error.claim_type,
                kind = %error.kind(),
                "claim transformation failed"
            );
            if config.fail_fast {
                abort.store(true, Ordering::Relaxed);
            }
            ClaimOutcome::Failed(error)
        }
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} claims")
    {
        bar.set_style(style);
    }
    bar
}

/// Fold per-claim outcomes into run counts.
///
/// `claims` and `outcomes` must be index-aligned.
pub fn summarize(claims: &[&ClaimAggregate], outcomes: &[ClaimOutcome]) -> ExportResult {
    let mut result = ExportResult::default();
    for (claim, outcome) in claims.iter().zip(outcomes) {
        let summary = result.by_type.entry(claim.claim_type()).or_default();
        summary.claims += 1;
        match outcome {
            ClaimOutcome::Transformed(transformed) => {
                summary.exported += 1;
                summary.warnings += transformed.warnings.len();
                result
                    .warnings
                    .extend(transformed.warnings.iter().map(|warning| ClaimWarning {
                        claim_type: claim.claim_type(),
                        claim_id: claim.claim_id().to_string(),
                        warning: warning.clone(),
                    }));
            }
            ClaimOutcome::Failed(error) => {
                summary.failed += 1;
                result.failures.push(error.clone());
            }
            ClaimOutcome::Skipped => {
                summary.skipped += 1;
                result.aborted = true;
            }
        }
    }
    result
}

/// Write transformed resources as JSON lines, in outcome order.
///
/// Returns the number of resources written.
pub fn write_resources<W: Write>(mut writer: W, outcomes: &[ClaimOutcome]) -> io::Result<usize> {
    let mut written = 0;
    for outcome in outcomes {
        if let ClaimOutcome::Transformed(transformed) = outcome {
            serde_json::to_writer(&mut writer, &transformed.resource)?;
            writer.write_all(b"\n")?;
            written += 1;
        }
    }
    writer.flush()?;
    Ok(written)
}
