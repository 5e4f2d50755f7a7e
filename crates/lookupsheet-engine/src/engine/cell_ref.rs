//! Cell coordinates.
//!
//! A cell is addressed by the *name* of its column plus a row index, not by
//! a column position. Column names come from the sheet schema, so a
//! [`CellRef`] is only meaningful relative to one sheet.
//!
//! # Examples
//!
//! ```
//! use lookupsheet_engine::engine::CellRef;
//!
//! let cell = CellRef::new("B", 3);
//! assert_eq!(cell.column, "B");
//! assert_eq!(cell.row, 3);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a cell by column name and row index.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CellRef {
    pub column: String,
    pub row: usize,
}

impl CellRef {
    pub fn new(column: impl Into<String>, row: usize) -> CellRef {
        CellRef {
            column: column.into(),
            row,
        }
    }

    /// True if this reference points at `column`/`row`.
    pub fn is(&self, column: &str, row: usize) -> bool {
        self.column == column && self.row == row
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}
