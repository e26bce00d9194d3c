//! Console rendering of findings and the closing run summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use labqc_ingest::any_to_string;
use labqc_model::CheckCategory;
use labqc_validate::Findings;

use crate::commands::{ExportOutcome, RunSummary};

/// Prints each category's findings: the "none found" message for empty
/// sets, otherwise the heading plus a dump of the offending rows.
pub fn print_findings(findings: &Findings) {
    for category in CheckCategory::ALL {
        let df = findings.get(category);
        if df.is_empty() {
            println!("{}\n", category.empty_message());
        } else {
            println!("{}", category.found_message());
            println!("{}\n", findings_table(df));
        }
    }
}

/// Prints the closing per-check summary table and export outcome.
pub fn print_run_summary(summary: &RunSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Rows"),
        header_cell("Export file"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut total = 0usize;
    for category in CheckCategory::ALL {
        let rows = summary.findings.get(category).height();
        total += rows;
        table.add_row(vec![
            Cell::new(category.label()),
            count_cell(rows),
            export_cell(&summary.outcome, category),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(total).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

/// Renders a findings DataFrame as a console table.
fn findings_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let columns = df.get_columns();
    for row in 0..df.height() {
        let cells: Vec<Cell> = columns
            .iter()
            .map(|column| {
                let value = column.get(row).unwrap_or(AnyValue::Null);
                Cell::new(any_to_string(&value))
            })
            .collect();
        table.add_row(cells);
    }
    table
}

fn export_cell(outcome: &ExportOutcome, category: CheckCategory) -> Cell {
    match outcome {
        ExportOutcome::Downloaded(files) => files
            .iter()
            .find(|file| file.category == category)
            .map_or_else(|| dim_cell("-"), |file| Cell::new(file.path.display())),
        ExportOutcome::NothingToDownload | ExportOutcome::Skipped => dim_cell("-"),
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
