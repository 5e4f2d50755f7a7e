//! lookupsheet-core - Sheet registry, assignment pipeline and storage.

pub mod definition;
pub mod error;
pub mod registry;
pub mod sheet;
pub mod storage;

pub use definition::{ReplayMode, ReplayReport, SheetDefinition, load_definition, replay};
pub use error::{ErrorKind, Result, SheetError};
pub use registry::SheetRegistry;
pub use sheet::Sheet;

pub use lookupsheet_engine::engine::{Cell, CellRef, Column, ColumnType, Value};
