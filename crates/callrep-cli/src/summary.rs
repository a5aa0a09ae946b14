//! Console summary tables for a finished run.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use callrep_core::{important_observations, outcome_distribution};
use callrep_model::{CleanRecord, OutcomeCategory};

use crate::commands::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Workbook: {}", result.processed.name);
    println!("Output: {}", result.output_dir.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Records"),
        header_cell("Phone 1"),
        header_cell("Phone 2"),
        header_cell("Email"),
        header_cell("Outcomes"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for sheet in &result.processed.sheets {
        let summary = &sheet.summary;
        table.add_row(vec![
            Cell::new(&summary.sheet)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.records),
            Cell::new(summary.with_phone1),
            Cell::new(summary.with_phone2),
            Cell::new(summary.with_email),
            Cell::new(summary.distinct_outcomes),
        ]);
    }
    let total = result.processed.consolidated_summary();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total.records).add_attribute(Attribute::Bold),
        Cell::new(total.with_phone1).add_attribute(Attribute::Bold),
        Cell::new(total.with_phone2).add_attribute(Attribute::Bold),
        Cell::new(total.with_email).add_attribute(Attribute::Bold),
        Cell::new(total.distinct_outcomes).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let records = result.processed.consolidate();
    print_distribution(&records);
    print_observations(&records);

    if !result.artifacts.is_empty() {
        println!();
        println!("Artifacts:");
        for path in &result.artifacts {
            println!("- {}", path.display());
        }
    }
}

fn print_distribution(records: &[CleanRecord]) {
    let distribution = outcome_distribution(records);
    if distribution.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in &distribution {
        table.add_row(vec![Cell::new(category.label()), Cell::new(count)]);
    }
    println!();
    println!("Outcome distribution:");
    println!("{table}");
}

fn print_observations(records: &[CleanRecord]) {
    let observations = important_observations(records);
    println!();
    if observations.count() == 0 {
        println!(
            "No important observations (every outcome is \"{}\").",
            OutcomeCategory::NotReached.label()
        );
        return;
    }
    println!(
        "Important observations: {} of {} ({:.1}%)",
        observations.count(),
        observations.total,
        observations.percent
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Company"),
        header_cell("CNPJ"),
        header_cell("Outcome"),
        header_cell("Note"),
    ]);
    apply_table_style(&mut table);
    for record in &observations.records {
        table.add_row(vec![
            text_cell(record.company_name.as_deref()),
            text_cell(record.company_id.as_deref()),
            Cell::new(record.outcome.label()),
            text_cell(record.note.as_deref()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
