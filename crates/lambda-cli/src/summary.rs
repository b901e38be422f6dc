use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use lambda_model::ViolationKind;

use crate::types::ValidateOutcome;

pub fn print_validation(outcome: &ValidateOutcome) {
    println!("Parameter file: {}", outcome.input.display());
    println!(
        "Component: {} {}",
        outcome.component_name, outcome.component_version
    );
    if !outcome.has_errors() {
        println!("No problems found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Field"),
        header_cell("Problem"),
        header_cell("Message"),
    ]);
    apply_violation_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, violation) in outcome.report.violations.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            field_cell(&violation.field),
            kind_cell(violation.kind),
            Cell::new(&violation.message),
        ]);
    }
    println!("{table}");
    eprintln!(
        "{} problem(s) found in {}",
        outcome.report.len(),
        outcome.input.display()
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_violation_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(3)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Fixed(15)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: ViolationKind) -> Cell {
    match kind {
        ViolationKind::Missing | ViolationKind::TypeMismatch => Cell::new(kind.as_str())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        ViolationKind::Unrecognized => Cell::new(kind.as_str()).fg(Color::Yellow),
        ViolationKind::InvalidValue | ViolationKind::OutOfRange => {
            Cell::new(kind.as_str()).fg(Color::Red)
        }
    }
}

fn field_cell(field: &str) -> Cell {
    Cell::new(field)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
