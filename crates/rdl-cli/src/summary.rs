use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rdl_report::CellSpec;

use crate::types::ReportSummary;

pub fn print_summary(reports: &[ReportSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Report"),
        header_cell("Dataset"),
        header_cell("Columns"),
        header_cell("Groups"),
        header_cell("Textboxes"),
        header_cell("Path"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for summary in reports {
        table.add_row(vec![
            Cell::new(&summary.report)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&summary.dataset),
            Cell::new(summary.columns),
            count_cell(summary.groups),
            Cell::new(summary.textboxes),
            dim_cell(summary.path.display()),
        ]);
    }
    println!("{table}");
}

/// Rows for the cell table printed by `inspect`.
pub fn cell_rows<'a>(
    row: &'a str,
    cells: &'a [CellSpec],
) -> impl Iterator<Item = Vec<Cell>> + 'a {
    cells.iter().map(move |cell| {
        let (text, field) = match cell.value.field_name() {
            Some(field) => (dim_cell("-"), Cell::new(field).fg(Color::Green)),
            None => (Cell::new(&cell.value), dim_cell("-")),
        };
        vec![
            dim_cell(row),
            Cell::new(&cell.name),
            text,
            field,
            optional_cell(cell.style.font_family.as_deref()),
            optional_cell(cell.style.format.as_deref()),
        ]
    })
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
