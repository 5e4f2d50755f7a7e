//! Process-wide map of sheet ids to sheets.
//!
//! The registry is constructed once at startup and passed to whatever
//! serves requests; there is no global instance. Lookups and inserts for
//! different sheets only contend on a `DashMap` shard, never on each other's
//! cell stores.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use crate::storage::to_csv;
use lookupsheet_engine::engine::{Cell, Column, Schema, Value};

/// Shared store of all sheets.
#[derive(Debug, Default)]
pub struct SheetRegistry {
    sheets: DashMap<String, Arc<Sheet>>,
}

impl SheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sheet with the given columns.
    ///
    /// With no id (or an empty one) a random UUID is assigned. A caller
    /// supplied id that is already taken fails with [`SheetError::DuplicateId`].
    pub fn create_sheet(&self, id: Option<String>, columns: Vec<Column>) -> Result<Arc<Sheet>> {
        let id = match id.filter(|id| !id.is_empty()) {
            Some(id) => {
                tracing::info!("Creating new sheet with custom ID: {}", id);
                id
            }
            None => {
                let id = uuid::Uuid::new_v4().to_string();
                tracing::info!("Creating new sheet with auto-generated ID: {}", id);
                id
            }
        };

        let schema = Schema::new(columns);
        if let Some(name) = schema.duplicate_name() {
            tracing::warn!("Column {} declared twice for sheet: {}", name, id);
            return Err(SheetError::DuplicateColumn(name.to_string()));
        }

        match self.sheets.entry(id) {
            Entry::Occupied(slot) => {
                tracing::warn!("Attempt to create sheet with existing ID: {}", slot.key());
                Err(SheetError::DuplicateId(slot.key().clone()))
            }
            Entry::Vacant(slot) => {
                let sheet = Arc::new(Sheet::new(slot.key().clone(), schema));
                tracing::debug!(
                    "Created sheet with ID: {}, columns: {}",
                    sheet.id(),
                    sheet.columns().len()
                );
                slot.insert(sheet.clone());
                Ok(sheet)
            }
        }
    }

    pub fn get_sheet(&self, id: &str) -> Option<Arc<Sheet>> {
        let sheet = self.sheets.get(id).map(|entry| entry.value().clone());
        if sheet.is_none() {
            tracing::debug!("Sheet not found with ID: {}", id);
        }
        sheet
    }

    fn require_sheet(&self, id: &str) -> Result<Arc<Sheet>> {
        self.get_sheet(id).ok_or_else(|| {
            tracing::warn!("Sheet not found with ID: {}", id);
            SheetError::SheetNotFound(id.to_string())
        })
    }

    /// Assign a value to a cell of the sheet `sheet_id`.
    /// See [`Sheet::set_cell_value`] for the rules.
    pub fn set_cell_value(
        &self,
        sheet_id: &str,
        column: &str,
        row: usize,
        raw: Value,
    ) -> Result<Cell> {
        // Clone the Arc out so the map shard is not held during the write.
        let sheet = self.require_sheet(sheet_id)?;
        sheet.set_cell_value(column, row, raw)
    }

    /// CSV export of the sheet `sheet_id`.
    pub fn export_csv(&self, sheet_id: &str) -> Result<String> {
        let sheet = self.require_sheet(sheet_id)?;
        Ok(to_csv(&sheet))
    }

    /// Ids of all sheets, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sheets.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
