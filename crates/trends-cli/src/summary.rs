use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use trends_cli::types::EtlResult;
use trends_model::{DIM_CUSTOMER, DIM_ITEM, FACT_PURCHASE};

pub fn print_summary(result: &EtlResult) {
    println!("Input: {}", result.input.display());
    println!("Records: {}", result.input_rows);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Loaded"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    let rows = [
        ("Customer", DIM_CUSTOMER.name, result.customer_rows),
        ("Item", DIM_ITEM.name, result.item_rows),
        ("Purchase", FACT_PURCHASE.name, result.purchase_rows),
    ];
    for (entity, target, count) in rows {
        table.add_row(vec![
            Cell::new(entity)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(target),
            Cell::new(count),
            loaded_cell(result, target),
        ]);
    }
    println!("{table}");
    if result.load.is_none() {
        println!("Dry run: no database operations performed.");
    }
}

fn loaded_cell(result: &EtlResult, target: &str) -> Cell {
    let loaded = result
        .load
        .as_ref()
        .is_some_and(|report| report.tables.iter().any(|t| t.table == target));
    if loaded {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
