//! Cell data structures for a sheet.
//!
//! This module provides the core data types for representing cells:
//! - [`Value`] - A literal value (boolean, integer, double, text or null)
//! - [`CellContents`] - Either a literal or a lookup with its cached value
//! - [`Cell`] - A cell with its coordinates and contents
//! - [`Grid`] - Sparse storage for the cells of one sheet

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

use super::cell_ref::CellRef;

/// A literal cell value.
///
/// Serialized untagged, so it round-trips through JSON/TOML scalars.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Double(_) => "double",
            Value::Text(_) => "string",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// What a cell holds. A cell is a lookup exactly when it has a target.
#[derive(Clone, Debug, PartialEq)]
pub enum CellContents {
    Literal(Value),
    Lookup {
        target: CellRef,
        /// Value of `target` at the last resolution.
        cached: Value,
    },
}

/// A cell in a sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub at: CellRef,
    pub contents: CellContents,
}

impl Cell {
    pub fn literal(at: CellRef, value: Value) -> Cell {
        Cell {
            at,
            contents: CellContents::Literal(value),
        }
    }

    pub fn lookup(at: CellRef, target: CellRef, cached: Value) -> Cell {
        Cell {
            at,
            contents: CellContents::Lookup { target, cached },
        }
    }

    /// Effective value: the literal, or the cached lookup result.
    pub fn value(&self) -> &Value {
        match &self.contents {
            CellContents::Literal(v) => v,
            CellContents::Lookup { cached, .. } => cached,
        }
    }

    pub fn lookup_target(&self) -> Option<&CellRef> {
        match &self.contents {
            CellContents::Literal(_) => None,
            CellContents::Lookup { target, .. } => Some(target),
        }
    }

    pub fn is_lookup(&self) -> bool {
        self.lookup_target().is_some()
    }

    /// Replace the cached value of a lookup cell. Literal cells are left alone.
    /// Returns true if the cell was a lookup.
    pub fn refresh(&mut self, value: Value) -> bool {
        match &mut self.contents {
            CellContents::Lookup { cached, .. } => {
                *cached = value;
                true
            }
            CellContents::Literal(_) => false,
        }
    }
}

/// Only `{column, row, value}` is exposed; lookup descriptors stay internal.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Cell", 3)?;
        state.serialize_field("column", &self.at.column)?;
        state.serialize_field("row", &self.at.row)?;
        state.serialize_field("value", self.value())?;
        state.end()
    }
}

/// Sparse cell storage of one sheet.
pub type Grid = HashMap<CellRef, Cell>;
