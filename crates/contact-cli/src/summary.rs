use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    let report = &result.report;
    let stats = &report.stats;
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(stats.rows)]);
    table.add_row(vec![Cell::new("Records created"), Cell::new(stats.created)]);
    table.add_row(vec![Cell::new("Rows merged"), Cell::new(stats.merged)]);
    table.add_row(vec![
        Cell::new("Rows skipped"),
        count_cell(stats.skipped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Addresses"),
        Cell::new(report.address_count()),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL records")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.records.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_skipped_table(result);
}

fn print_skipped_table(result: &ConvertResult) {
    let skipped = &result.report.skipped;
    if skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Line"), header_cell("Reason")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in skipped {
        table.add_row(vec![
            Cell::new(row.line).fg(Color::Yellow),
            Cell::new(row.reason.to_string()),
        ]);
    }
    println!();
    println!("Skipped rows:");
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
        .set_width(80);
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

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
