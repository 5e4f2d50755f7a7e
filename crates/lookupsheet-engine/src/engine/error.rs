//! Error types for cell assignment.

use thiserror::Error;

use super::{CellRef, ColumnType};

/// Reasons a single cell assignment can be rejected by the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellError {
    #[error("Invalid lookup function format: {expression}")]
    Parse { expression: String },

    #[error("Referenced column not found: {column}")]
    UnknownColumn { column: String },

    #[error("Expected {expected} value for column {column}, got {found}")]
    InvalidLiteral {
        column: String,
        expected: ColumnType,
        found: &'static str,
    },

    #[error("Type mismatch: cannot set lookup from {from} to {to}")]
    LookupTypeMismatch { from: ColumnType, to: ColumnType },

    #[error("Unsupported column type: {name}")]
    UnsupportedType { name: String },

    #[error("Cycle detected in cell references: {}", format_path(.path))]
    Cycle { path: Vec<CellRef> },
}

fn format_path(path: &[CellRef]) -> String {
    path.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
