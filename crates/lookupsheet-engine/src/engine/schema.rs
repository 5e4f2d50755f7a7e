//! Column definitions.
//!
//! A sheet's schema is an ordered list of named, typed columns. It is fixed
//! when the sheet is created; cells are validated against it on every write
//! and the CSV header is rendered from it in declaration order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CellError;

/// Declared type of a column.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColumnType {
    Boolean,
    Int,
    Double,
    String,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::Int => "int",
            ColumnType::Double => "double",
            ColumnType::String => "string",
        }
    }
}

impl FromStr for ColumnType {
    type Err = CellError;

    /// Type names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boolean" => Ok(ColumnType::Boolean),
            "int" => Ok(ColumnType::Int),
            "double" => Ok(ColumnType::Double),
            "string" => Ok(ColumnType::String),
            _ => Err(CellError::UnsupportedType {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ColumnType {
    type Error = CellError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColumnType> for String {
    fn from(value: ColumnType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Column {
        Column {
            name: name.into(),
            column_type,
        }
    }

    /// Build a column from an untyped type name, e.g. from a request body.
    pub fn parse(name: impl Into<String>, type_name: &str) -> Result<Column, CellError> {
        Ok(Column::new(name, type_name.parse()?))
    }
}

/// Ordered column list of one sheet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Schema {
        Schema { columns }
    }

    /// Find a column by name. With duplicate names the first one wins.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// First column name that appears more than once, if any.
    pub fn duplicate_name(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.names().find(|name| !seen.insert(*name))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_parse_is_case_insensitive() {
        assert_eq!("Boolean".parse::<ColumnType>().unwrap(), ColumnType::Boolean);
        assert_eq!("INT".parse::<ColumnType>().unwrap(), ColumnType::Int);
        assert_eq!("double".parse::<ColumnType>().unwrap(), ColumnType::Double);
        assert_eq!("String".parse::<ColumnType>().unwrap(), ColumnType::String);
    }

    #[test]
    fn test_column_type_parse_rejects_unknown() {
        let err = "date".parse::<ColumnType>().unwrap_err();
        assert_eq!(
            err,
            CellError::UnsupportedType {
                name: "date".to_string()
            }
        );
    }

    #[test]
    fn test_column_serde_uses_type_key() {
        let col: Column = serde_json::from_str(r#"{"name":"A","type":"int"}"#).unwrap();
        assert_eq!(col, Column::new("A", ColumnType::Int));
        assert_eq!(
            serde_json::to_string(&col).unwrap(),
            r#"{"name":"A","type":"int"}"#
        );
        assert!(serde_json::from_str::<Column>(r#"{"name":"A","type":"money"}"#).is_err());
    }

    #[test]
    fn test_schema_first_match_wins() {
        let schema = Schema::new(vec![
            Column::new("A", ColumnType::Int),
            Column::new("A", ColumnType::String),
        ]);
        assert_eq!(schema.column("A").unwrap().column_type, ColumnType::Int);
        assert_eq!(schema.duplicate_name(), Some("A"));
        assert!(schema.column("B").is_none());
    }

    #[test]
    fn test_schema_names_keep_order() {
        let schema = Schema::new(vec![
            Column::new("Z", ColumnType::Int),
            Column::new("A", ColumnType::Int),
        ]);
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["Z", "A"]);
        assert_eq!(schema.duplicate_name(), None);
    }
}
