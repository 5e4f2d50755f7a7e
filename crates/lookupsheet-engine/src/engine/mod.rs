//! Cell engine API.
//!
//! This module provides the pure pieces of a lookup sheet, with no notion of
//! sheet ids or locking:
//!
//! - [`Cell`], [`CellContents`], [`Value`], [`Grid`] - Data structures for cell storage
//! - [`Column`], [`ColumnType`], [`Schema`] - Declared column types
//! - [`CellRef`] - Cell coordinates (column name + row index)
//! - [`validate_literal`] - Check and coerce a literal against a column type
//! - [`parse_lookup`], [`resolve_lookup`] - Lookup expression handling
//! - [`detect_cycle`] - Reference cycle detection before commit
//! - [`propagate`] - Refresh cached values of dependent lookup cells
//! - [`format_value`] - Format values for export

mod cell;
mod cell_ref;
mod cycle;
mod error;
mod format;
mod lookup;
mod propagate;
mod schema;
mod validate;

pub use cell::{Cell, CellContents, Grid, Value};
pub use cell_ref::CellRef;
pub use cycle::detect_cycle;
pub use error::CellError;
pub use format::{format_double, format_value};
pub use lookup::{lookup_expression, parse_lookup, resolve_lookup};
pub use propagate::{dependents_index, propagate};
pub use schema::{Column, ColumnType, Schema};
pub use validate::validate_literal;
