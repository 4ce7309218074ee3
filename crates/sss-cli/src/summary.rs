//! Run summary printed after a successful conversion.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::types::ConvertSummary;

pub fn print_summary(summary: &ConvertSummary) {
    println!("Dictionary: {}", summary.dictionary_path.display());
    println!("Syntax: {}", summary.output_path.display());
    let mut table = Table::new();
    table.set_header(vec!["Variables", "Layout entries", "Value label sections"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        count_cell(summary.variables),
        count_cell(summary.layout_entries),
        count_cell(summary.value_label_sections),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}
