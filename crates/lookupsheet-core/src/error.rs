//! Error types for Lookupsheet core.

use thiserror::Error;

use lookupsheet_engine::engine::CellError;

/// Errors that can occur while creating, updating or exporting sheets.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Sheet not found with id: {0}")]
    SheetNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Sheet with ID {0} already exists")]
    DuplicateId(String),

    #[error("Column {0} is declared more than once")]
    DuplicateColumn(String),

    #[error(transparent)]
    Cell(#[from] CellError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid sheet definition: {0}")]
    Definition(String),
}

/// Stable discriminant of a [`SheetError`], for mapping to status codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    SheetNotFound,
    ColumnNotFound,
    DuplicateId,
    DuplicateColumn,
    Parse,
    UnknownColumn,
    TypeMismatch,
    UnsupportedType,
    Cycle,
    Io,
    Definition,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SheetNotFound => "sheet_not_found",
            ErrorKind::ColumnNotFound => "column_not_found",
            ErrorKind::DuplicateId => "duplicate_id",
            ErrorKind::DuplicateColumn => "duplicate_column",
            ErrorKind::Parse => "parse",
            ErrorKind::UnknownColumn => "unknown_column",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::UnsupportedType => "unsupported_type",
            ErrorKind::Cycle => "cycle",
            ErrorKind::Io => "io",
            ErrorKind::Definition => "definition",
        }
    }
}

impl SheetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SheetError::SheetNotFound(_) => ErrorKind::SheetNotFound,
            SheetError::ColumnNotFound(_) => ErrorKind::ColumnNotFound,
            SheetError::DuplicateId(_) => ErrorKind::DuplicateId,
            SheetError::DuplicateColumn(_) => ErrorKind::DuplicateColumn,
            SheetError::Cell(CellError::Parse { .. }) => ErrorKind::Parse,
            SheetError::Cell(CellError::UnknownColumn { .. }) => ErrorKind::UnknownColumn,
            SheetError::Cell(
                CellError::InvalidLiteral { .. } | CellError::LookupTypeMismatch { .. },
            ) => ErrorKind::TypeMismatch,
            SheetError::Cell(CellError::UnsupportedType { .. }) => ErrorKind::UnsupportedType,
            SheetError::Cell(CellError::Cycle { .. }) => ErrorKind::Cycle,
            SheetError::Io(_) => ErrorKind::Io,
            SheetError::Definition(_) => ErrorKind::Definition,
        }
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
