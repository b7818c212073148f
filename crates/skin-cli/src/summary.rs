use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use skin_cli::pipeline::TranslateResult;

pub fn print_summary(result: &TranslateResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    println!("Ontology entries: {}", result.ontology_entries);

    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Processed"),
        header_cell("Matched"),
        header_cell("Unmatched"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(stats.total).add_attribute(Attribute::Bold),
        Cell::new(stats.processed),
        count_cell(stats.matched, Color::Green),
        count_cell(stats.unmatched, Color::Yellow),
        count_cell(stats.skipped, Color::DarkGrey),
    ]);
    println!("{table}");

    match (&result.translated_path, &result.unmatched_path) {
        (Some(translated), Some(unmatched)) => {
            print_output("Translated", translated);
            print_output("Unmatched labels", unmatched);
        }
        _ => println!("Dry run: no files written."),
    }
}

fn print_output(label: &str, path: &Path) {
    println!("{label}: {}", path.display());
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
