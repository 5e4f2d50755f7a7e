use super::Sheet;
use crate::error::{Result, SheetError};
use lookupsheet_engine::engine::{
    Cell, CellError, CellRef, Value, detect_cycle, lookup_expression, propagate, resolve_lookup,
    validate_literal,
};

impl Sheet {
    /// Assign `raw` to the cell at `column`/`row`.
    ///
    /// Strings starting with `lookup(` are lookup expressions; everything
    /// else is a literal checked against the column type. Nothing is written
    /// unless every check passes. On success the new cell is committed, all
    /// lookup cells depending on it are refreshed, and the committed cell is
    /// returned.
    pub fn set_cell_value(&self, column: &str, row: usize, raw: Value) -> Result<Cell> {
        tracing::info!(
            "Setting cell value in sheet: {}, column: {}, row: {}",
            self.id(),
            column,
            row
        );

        let Some(own) = self.schema().column(column) else {
            tracing::warn!("Column not found: {} in sheet: {}", column, self.id());
            return Err(SheetError::ColumnNotFound(column.to_string()));
        };
        let at = CellRef::new(column, row);

        let mut grid = self.write_grid();

        let cell = match lookup_expression(&raw) {
            Some(expression) => {
                tracing::debug!("Processing lookup function: {}", expression);
                resolve_lookup(self.schema(), own, &at, expression, &grid)?
            }
            None => {
                tracing::debug!(
                    "Validating {} value against column type: {}",
                    raw.kind_name(),
                    own.column_type
                );
                Cell::literal(at.clone(), validate_literal(own, raw)?)
            }
        };

        if let Some(target) = cell.lookup_target()
            && let Some(path) = detect_cycle(&at, target, &grid)
        {
            return Err(CellError::Cycle { path }.into());
        }

        grid.insert(at.clone(), cell.clone());
        tracing::info!("Cell {} set successfully in sheet: {}", at, self.id());

        let updated = propagate(&mut grid, &at);
        if !updated.is_empty() {
            tracing::debug!("Updated {} dependent cell(s) of {}", updated.len(), at);
        }

        Ok(cell)
    }
}
