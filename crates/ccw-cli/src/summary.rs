use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ccw_cli::types::{ExportResult, TypeSummary};

/// Failures listed on stderr before the rest are left to the report.
const MAX_LISTED_FAILURES: usize = 20;

pub fn print_summary(result: &ExportResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: not written"),
    }
    if let Some(path) = &result.report {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Claim type"),
        header_cell("Claims"),
        header_cell("Exported"),
        header_cell("Failed"),
        header_cell("Skipped"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (claim_type, summary) in &result.by_type {
        let mut row = vec![
            Cell::new(claim_type.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        row.extend(count_cells(summary));
        table.add_row(row);
    }
    let mut total = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ];
    total.extend(
        count_cells(&result.total())
            .into_iter()
            .map(|cell| cell.add_attribute(Attribute::Bold)),
    );
    table.add_row(total);
    println!("{table}");
    if !result.rejected.is_empty() {
        println!("Rejected records: {}", result.rejected.len());
    }
    println!("Duration: {:.2?}", result.duration);

    if result.aborted {
        eprintln!("Stopped after the first failure; no resources were written.");
    }
    if result.has_failures() {
        eprintln!("Failures:");
        let rejected = result.rejected.iter().map(|record| record.error.to_string());
        let failures = result.failures.iter().map(ToString::to_string);
        for message in rejected.chain(failures).take(MAX_LISTED_FAILURES) {
            eprintln!("- {message}");
        }
        let listed = result.rejected.len() + result.failures.len();
        let remaining = listed.saturating_sub(MAX_LISTED_FAILURES);
        if remaining > 0 {
            eprintln!("- ... and {remaining} more");
        }
    }
}

fn count_cells(summary: &TypeSummary) -> Vec<Cell> {
    vec![
        Cell::new(summary.claims),
        count_cell(summary.exported, Color::Green),
        count_cell(summary.failed, Color::Red),
        count_cell(summary.skipped, Color::DarkGrey),
        count_cell(summary.warnings, Color::Yellow),
    ]
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn yes_no_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
