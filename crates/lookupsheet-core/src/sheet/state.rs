use lookupsheet_engine::engine::{Cell, CellRef, Column, Grid, Schema};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One sheet: an immutable id and schema plus its cell store.
///
/// The cell store sits behind an `RwLock`; every assignment (validate,
/// commit, propagate) holds the write lock for its whole duration, so two
/// writers to the same sheet never interleave.
#[derive(Debug)]
pub struct Sheet {
    id: String,
    schema: Schema,
    grid: RwLock<Grid>,
}

impl Sheet {
    /// Create an empty sheet. Id uniqueness is the registry's concern.
    pub fn new(id: impl Into<String>, schema: Schema) -> Self {
        Sheet {
            id: id.into(),
            schema,
            grid: RwLock::new(Grid::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn columns(&self) -> &[Column] {
        self.schema.columns()
    }

    /// Current state of one cell, or `None` if it was never written.
    pub fn cell(&self, column: &str, row: usize) -> Option<Cell> {
        self.read_grid().get(&CellRef::new(column, row)).cloned()
    }

    /// All cells, ordered by row and then by column position in the schema.
    pub fn cells(&self) -> Vec<Cell> {
        let grid = self.read_grid();
        let position = |name: &str| self.schema.names().position(|n| n == name);
        let mut cells: Vec<Cell> = grid.values().cloned().collect();
        cells.sort_by(|a, b| {
            a.at.row
                .cmp(&b.at.row)
                .then_with(|| position(&a.at.column).cmp(&position(&b.at.column)))
        });
        cells
    }

    /// Number of cells that have been written.
    pub fn len(&self) -> usize {
        self.read_grid().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave a half-written cell: the
    // grid is only touched by a single insert and cached-value refreshes.
    pub(crate) fn read_grid(&self) -> RwLockReadGuard<'_, Grid> {
        self.grid.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn write_grid(&self) -> RwLockWriteGuard<'_, Grid> {
        self.grid.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
