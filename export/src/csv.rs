//! FILENAME: export/src/csv.rs
//! PURPOSE: CSV text building with RFC-4180 escaping.
//! CONTEXT: Every cell is double-quoted with internal quotes doubled,
//! so values containing commas, quotes, or newlines survive a round
//! trip through any conforming parser. Numbers are written in plain
//! decimal form (no grouping, no currency glyph) to stay parseable.

use records::{AreaSales, CreditEntry, Customer, FieldValue, RentEntry};

/// One CSV column: a header label plus a field accessor.
pub struct Column<R> {
    pub header: &'static str,
    pub accessor: fn(&R) -> FieldValue,
}

impl<R> Column<R> {
    pub fn new(header: &'static str, accessor: fn(&R) -> FieldValue) -> Self {
        Column { header, accessor }
    }
}

/// Quote a cell, doubling any internal double quotes.
fn escape_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Build the CSV text: header line first, then one line per record in
/// input order. Lines are `\n`-joined with no trailing newline.
pub fn to_csv<R>(records: &[&R], columns: &[Column<R>]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);

    let header: Vec<String> = columns.iter().map(|c| escape_cell(c.header)).collect();
    lines.push(header.join(","));

    for record in records {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| escape_cell(&(c.accessor)(record).as_text()))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Columns behind the customers page's Export button.
pub fn customer_columns() -> Vec<Column<Customer>> {
    vec![
        Column::new("ID", |c| FieldValue::from(c.id)),
        Column::new("Name", |c| FieldValue::from(c.name.as_str())),
        Column::new("Phone", |c| FieldValue::from(c.phone.as_str())),
        Column::new("Amount", |c| FieldValue::from(c.amount)),
    ]
}

/// Columns for the rent list export.
pub fn rent_columns() -> Vec<Column<RentEntry>> {
    vec![
        Column::new("#", |r| FieldValue::from(r.id)),
        Column::new("ঠিকানা", |r| FieldValue::from(r.address.as_str())),
        Column::new("এলাকা", |r| FieldValue::from(r.area.as_str())),
        Column::new("ভাড়া", |r| FieldValue::from(r.rent)),
    ]
}

/// Columns for the credit list export.
pub fn credit_columns() -> Vec<Column<CreditEntry>> {
    vec![
        Column::new("ID", |c| FieldValue::from(c.id)),
        Column::new("Name", |c| FieldValue::from(c.name.as_str())),
        Column::new("Location", |c| FieldValue::from(c.location.as_str())),
        Column::new("Owed", |c| FieldValue::from(c.owed)),
    ]
}

/// Columns for the sales-by-area report export.
pub fn area_columns() -> Vec<Column<AreaSales>> {
    vec![
        Column::new("Area", |a| FieldValue::from(a.area.as_str())),
        Column::new("Customers", |a| FieldValue::from(a.customers)),
        Column::new("Chalans", |a| FieldValue::from(a.chalans)),
        Column::new("Units", |a| FieldValue::from(a.units)),
        Column::new("Sales (৳)", |a| FieldValue::from(a.sales)),
    ]
}
