use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use ccw_cli::export::{
    ExportConfig, load_repository, summarize, transform_claims, write_resources,
};
use ccw_cli::report::write_issue_report;
use ccw_cli::types::ExportResult;
use ccw_ingest::{ClaimRepository, InMemoryRepository};
use ccw_model::{BeneficiaryId, ClaimAggregate, ClaimType};
use ccw_standards::profile;
use ccw_transform::{TransformOptions, supported_claim_types};

use crate::cli::{ClaimTypeArg, ExportArgs};
use crate::summary::{apply_table_style, header_cell, yes_no_cell};

pub fn run_claim_types() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Claim type"),
        header_cell("Code"),
        header_cell("FHIR type"),
        header_cell("Coverage"),
        header_cell("Export"),
    ]);
    apply_table_style(&mut table);
    for claim_type in ClaimType::ALL {
        let profile = profile(claim_type);
        table.add_row(vec![
            Cell::new(claim_type.as_str()),
            Cell::new(claim_type.code()),
            Cell::new(profile.fhir_claim_type.code()),
            Cell::new(profile.segment.url_prefix()),
            yes_no_cell(supported_claim_types().contains(&claim_type)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let span = info_span!("export", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let (repository, rejected) = load_repository(&args.input)?;
    let selected = select_claims(&repository, args)?;
    info!(
        loaded = repository.len(),
        rejected = rejected.len(),
        selected = selected.len(),
        "claims selected"
    );

    let config = ExportConfig {
        jobs: args.jobs.map(usize::from),
        options: if args.strict {
            TransformOptions::strict()
        } else {
            TransformOptions::new()
        },
        fail_fast: args.fail_fast,
        show_progress: !args.no_progress,
    };
    let outcomes = transform_claims(&selected, &config)?;
    let mut result = summarize(&selected, &outcomes);
    result.input = args.input.clone();
    result.rejected = rejected;
    result.aborted |= config.fail_fast && result.has_failures();

    if !result.aborted {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| default_output(&args.input));
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
        let file = File::create(&output)
            .with_context(|| format!("create output {}", output.display()))?;
        let written = write_resources(BufWriter::new(file), &outcomes)
            .with_context(|| format!("write resources to {}", output.display()))?;
        info!(output = %output.display(), resources = written, "resources written");
        result.output = Some(output);
    }

    if let Some(report) = &args.report {
        let issues = write_issue_report(report, &result)?;
        info!(report = %report.display(), issues, "issue report written");
        result.report = Some(report.clone());
    }

    result.duration = start.elapsed();
    Ok(result)
}

fn select_claims<'a>(
    repository: &'a InMemoryRepository,
    args: &ExportArgs,
) -> Result<Vec<&'a ClaimAggregate>> {
    let wanted: Vec<ClaimType> = if args.claim_types.is_empty() {
        supported_claim_types().to_vec()
    } else {
        args.claim_types.iter().copied().map(claim_type).collect()
    };

    let Some(beneficiary) = &args.beneficiary else {
        return Ok(repository
            .iter()
            .filter(|claim| wanted.contains(&claim.claim_type()))
            .collect());
    };
    let beneficiary = BeneficiaryId::new(beneficiary.as_str()).context("parse --beneficiary")?;
    Ok(wanted
        .into_iter()
        .flat_map(|claim_type| repository.find_by_beneficiary(&beneficiary, claim_type))
        .collect())
}

fn claim_type(arg: ClaimTypeArg) -> ClaimType {
    match arg {
        ClaimTypeArg::Hospice => ClaimType::Hospice,
        ClaimTypeArg::Outpatient => ClaimType::Outpatient,
    }
}

/// `claims.jsonl` becomes `claims.eob.jsonl` next to the input.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("claims");
    input.with_file_name(format!("{stem}.eob.jsonl"))
}
