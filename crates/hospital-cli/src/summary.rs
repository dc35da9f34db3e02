use std::path::PathBuf;

use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hospital_cli::pipeline::ProcessResult;
use hospital_output::Inspection;

use crate::commands::ReportResult;

pub fn print_process_summary(result: &ProcessResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Source lines: {}", result.source_lines);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Layout"),
        header_cell("Lines"),
        header_cell("Accepted"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for stats in &result.layouts {
        table.add_row(vec![
            Cell::new(&stats.layout)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stats.lines),
            Cell::new(stats.accepted),
            count_cell(stats.skipped, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.cleaned).add_attribute(Attribute::Bold),
        count_cell(result.skipped(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!("Cleaned: {}", result.cleaned);
    println!("Duplicates dropped: {}", result.duplicates);
    println!("Records written: {}", result.records.len());
    println!("Elapsed: {:.2?}", result.elapsed);
}

pub fn print_report_summary(result: &ReportResult) {
    println!("Report: {}", result.output.display());
    println!(
        "Hospitals: {} ({} listed)",
        result.summary.total, result.summary.listed
    );
}

pub fn print_inspections(results: &[(PathBuf, Result<Inspection>)]) {
    for (path, result) in results {
        println!("Workbook: {}", path.display());
        match result {
            Ok(inspection) => print_inspection(inspection),
            Err(error) => eprintln!("error: {error:#}"),
        }
        println!();
    }
}

fn print_inspection(inspection: &Inspection) {
    println!("Sheet: {}", inspection.sheet);
    println!("Rows: {}", inspection.row_count);
    println!("Columns: {}", inspection.columns.join(", "));

    let Some(first_row) = &inspection.first_row else {
        println!("First row: (no data rows)");
        return;
    };
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("First row")]);
    apply_table_style(&mut table);
    for (column, value) in first_row {
        let value_cell = match value {
            Some(value) => Cell::new(value),
            None => dim_cell("(empty)"),
        };
        table.add_row(vec![Cell::new(column), value_cell]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
