//! CSV export functionality

use crate::error::Result;
use crate::sheet::Sheet;
use lookupsheet_engine::engine::{CellRef, Value, format_value};
use std::collections::BTreeSet;
use std::path::Path;

/// Render a sheet as CSV.
///
/// The header is `Row,` followed by the column names in schema order. There
/// is one data row per row index that has at least one cell, in ascending
/// order, starting with the row index. Missing cells are empty fields.
pub fn to_csv(sheet: &Sheet) -> String {
    tracing::debug!("Converting sheet to CSV format: {}", sheet.id());
    let grid = sheet.read_grid();
    let columns = sheet.columns();

    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let mut out = format!("Row,{}\n", names.join(","));

    let rows: BTreeSet<usize> = grid.keys().map(|cell_ref| cell_ref.row).collect();
    for row in rows {
        let mut fields = Vec::with_capacity(columns.len());
        for column in columns {
            let field = grid
                .get(&CellRef::new(column.name.as_str(), row))
                .map(|cell| escape_csv_field(cell.value()))
                .unwrap_or_default();
            fields.push(field);
        }
        out.push_str(&format!("{},{}\n", row, fields.join(",")));
    }

    out
}

/// Export a sheet to a CSV file.
pub fn write_csv(path: &Path, sheet: &Sheet) -> Result<()> {
    std::fs::write(path, to_csv(sheet))?;
    Ok(())
}

/// Text containing a comma is wrapped in double quotes; nothing else is escaped.
fn escape_csv_field(value: &Value) -> String {
    let field = format_value(value);
    match value {
        Value::Text(s) if s.contains(',') => format!("\"{}\"", field),
        _ => field,
    }
}
