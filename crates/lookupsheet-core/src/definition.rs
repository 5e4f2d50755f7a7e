//! Sheet definition files.
//!
//! A definition is a TOML document with the sheet schema and a list of cell
//! assignments that are replayed, in order, through the normal assignment
//! pipeline:
//!
//! ```toml
//! id = "budget"
//!
//! [[columns]]
//! name = "A"
//! type = "string"
//!
//! [[cells]]
//! column = "A"
//! row = 1
//! value = "Hello, World"
//! ```
//!
//! `id` is optional, as is `value` (a missing value assigns null).

use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, SheetError};
use crate::registry::SheetRegistry;
use crate::sheet::Sheet;
use lookupsheet_engine::engine::{Column, Value};

const MAX_DEFINITION_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetDefinition {
    pub id: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
    #[serde(default)]
    pub cells: Vec<CellAssignment>,
}

/// Column as written in a definition; the type is checked on replay so an
/// unknown type surfaces as an unsupported-type error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellAssignment {
    pub column: String,
    pub row: usize,
    #[serde(default)]
    pub value: Value,
}

/// Whether replay continues after a rejected assignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReplayMode {
    StopOnError,
    KeepGoing,
}

/// An assignment that the pipeline refused.
#[derive(Debug)]
pub struct Rejection {
    pub assignment: CellAssignment,
    pub error: SheetError,
}

/// Outcome of [`replay`].
#[derive(Debug)]
pub struct ReplayReport {
    pub sheet: Arc<Sheet>,
    pub applied: usize,
    pub rejected: Vec<Rejection>,
}

/// Parse a definition from TOML text.
pub fn parse_definition(content: &str) -> Result<SheetDefinition> {
    toml::from_str(content).map_err(|err| SheetError::Definition(err.to_string()))
}

/// Read and parse a definition file.
pub fn load_definition(path: &Path) -> Result<SheetDefinition> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_DEFINITION_FILE_BYTES {
        return Err(SheetError::Definition(format!(
            "Refusing to read {}: definition file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_DEFINITION_FILE_BYTES
        )));
    }
    let content = std::fs::read_to_string(path)?;
    parse_definition(&content).map_err(|err| match err {
        SheetError::Definition(message) => {
            SheetError::Definition(format!("{}: {}", path.display(), message))
        }
        other => other,
    })
}

/// Create the sheet described by `definition` in `registry` and apply its
/// cell assignments in order.
///
/// Errors creating the sheet are returned directly. Rejected assignments
/// are collected in the report; with [`ReplayMode::StopOnError`] replay
/// ends at the first one.
pub fn replay(
    registry: &SheetRegistry,
    definition: SheetDefinition,
    mode: ReplayMode,
) -> Result<ReplayReport> {
    let columns = definition
        .columns
        .iter()
        .map(|c| Column::parse(c.name.as_str(), &c.type_name))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let sheet = registry.create_sheet(definition.id, columns)?;

    let mut applied = 0;
    let mut rejected = Vec::new();
    for assignment in definition.cells {
        match sheet.set_cell_value(&assignment.column, assignment.row, assignment.value.clone()) {
            Ok(_) => applied += 1,
            Err(error) => {
                tracing::warn!(
                    "Assignment to {}{} rejected: {}",
                    assignment.column,
                    assignment.row,
                    error
                );
                rejected.push(Rejection { assignment, error });
                if mode == ReplayMode::StopOnError {
                    break;
                }
            }
        }
    }

    Ok(ReplayReport {
        sheet,
        applied,
        rejected,
    })
}
