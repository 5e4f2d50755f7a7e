//! Lookup expression parsing and resolution.
//!
//! A lookup cell is written as `lookup(<column>, <row>)`, e.g. `lookup(A, 3)`.
//! Column names in a lookup are letters only; whitespace is allowed around
//! the arguments. The referenced column must share the declaring column's
//! type exactly (no `int` to `double` widening).

use regex::Regex;
use std::sync::OnceLock;

use super::{Cell, CellError, CellRef, Column, Grid, Schema, Value};

const LOOKUP_PREFIX: &str = "lookup(";

fn lookup_re() -> &'static Regex {
    static LOOKUP_RE: OnceLock<Regex> = OnceLock::new();
    LOOKUP_RE.get_or_init(|| {
        Regex::new(r"^lookup\(\s*([A-Za-z]+)\s*,\s*([0-9]+)\s*\)$")
            .expect("lookup expression regex must compile")
    })
}

/// Return the expression text if `raw` should be treated as a lookup.
///
/// Any string starting with `lookup(` counts, so a malformed lookup is
/// reported as a parse error instead of being stored as text.
pub fn lookup_expression(raw: &Value) -> Option<&str> {
    raw.as_str().filter(|s| s.starts_with(LOOKUP_PREFIX))
}

/// Parse `lookup(<column>, <row>)` into the referenced coordinates.
pub fn parse_lookup(expression: &str) -> Result<CellRef, CellError> {
    let parse_error = || CellError::Parse {
        expression: expression.to_string(),
    };

    let caps = lookup_re().captures(expression).ok_or_else(parse_error)?;
    // Digits only, so the only failure left is overflow.
    let row = caps[2].parse::<usize>().map_err(|_| parse_error())?;
    Ok(CellRef::new(&caps[1], row))
}

/// Build the lookup cell for `at` (a cell of column `own`) from `expression`.
///
/// The cached value is the referenced cell's current value, or null when the
/// referenced cell does not exist yet. Cycle detection is a separate step.
pub fn resolve_lookup(
    schema: &Schema,
    own: &Column,
    at: &CellRef,
    expression: &str,
    grid: &Grid,
) -> Result<Cell, CellError> {
    let target = parse_lookup(expression).inspect_err(|_| {
        tracing::warn!("Invalid lookup function format: {}", expression);
    })?;
    tracing::debug!("Lookup {} references {}", at, target);

    let Some(referenced) = schema.column(&target.column) else {
        tracing::warn!("Referenced column not found: {}", target.column);
        return Err(CellError::UnknownColumn {
            column: target.column,
        });
    };

    if referenced.column_type != own.column_type {
        tracing::warn!(
            "Type mismatch: cannot set lookup from {} to {}",
            referenced.column_type,
            own.column_type
        );
        return Err(CellError::LookupTypeMismatch {
            from: referenced.column_type,
            to: own.column_type,
        });
    }

    let cached = grid
        .get(&target)
        .map(|cell| cell.value().clone())
        .unwrap_or_default();
    tracing::debug!("Referenced cell {} value: {:?}", target, cached);

    Ok(Cell::lookup(at.clone(), target, cached))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ColumnType;

    fn schema() -> Schema {
        Schema::new(vec![
            Column::new("A", ColumnType::String),
            Column::new("B", ColumnType::Int),
            Column::new("C", ColumnType::String),
        ])
    }

    #[test]
    fn test_parse_lookup_basic() {
        assert_eq!(parse_lookup("lookup(A,1)").unwrap(), CellRef::new("A", 1));
        assert_eq!(
            parse_lookup("lookup(  Price ,  42 )").unwrap(),
            CellRef::new("Price", 42)
        );
        assert_eq!(parse_lookup("lookup(A, 0)").unwrap(), CellRef::new("A", 0));
    }

    #[test]
    fn test_parse_lookup_rejects_other_shapes() {
        for bad in [
            "lookup(A)",
            "lookup(A,-1)",
            "lookup(A1,1)",
            "lookup(A,1.5)",
            "lookup(A,1) ",
            "LOOKUP(A,1)",
            "lookup(,1)",
            "lookup(A,99999999999999999999999999)",
        ] {
            assert!(
                matches!(parse_lookup(bad), Err(CellError::Parse { .. })),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_lookup_expression_detection() {
        assert_eq!(lookup_expression(&Value::from("lookup(A,1)")), Some("lookup(A,1)"));
        assert_eq!(lookup_expression(&Value::from("lookup(oops")), Some("lookup(oops"));
        assert_eq!(lookup_expression(&Value::from("see lookup(A,1)")), None);
        assert_eq!(lookup_expression(&Value::Int(1)), None);
    }

    #[test]
    fn test_resolve_lookup_caches_current_value() {
        let schema = schema();
        let mut grid = Grid::new();
        let a1 = CellRef::new("A", 1);
        grid.insert(a1.clone(), Cell::literal(a1.clone(), Value::from("x")));

        let own = schema.column("C").unwrap();
        let cell = resolve_lookup(&schema, own, &CellRef::new("C", 1), "lookup(A,1)", &grid).unwrap();
        assert_eq!(cell.lookup_target(), Some(&a1));
        assert_eq!(cell.value(), &Value::from("x"));
    }

    #[test]
    fn test_resolve_lookup_missing_target_is_null() {
        let schema = schema();
        let grid = Grid::new();
        let own = schema.column("C").unwrap();
        let cell = resolve_lookup(&schema, own, &CellRef::new("C", 1), "lookup(A,9)", &grid).unwrap();
        assert!(cell.is_lookup());
        assert_eq!(cell.value(), &Value::Null);
    }

    #[test]
    fn test_resolve_lookup_unknown_column() {
        let schema = schema();
        let own = schema.column("A").unwrap();
        let err = resolve_lookup(&schema, own, &CellRef::new("A", 1), "lookup(Z,1)", &Grid::new())
            .unwrap_err();
        assert_eq!(err, CellError::UnknownColumn { column: "Z".to_string() });
    }

    #[test]
    fn test_resolve_lookup_type_mismatch() {
        let schema = schema();
        let own = schema.column("B").unwrap();
        let err = resolve_lookup(&schema, own, &CellRef::new("B", 1), "lookup(A,1)", &Grid::new())
            .unwrap_err();
        assert_eq!(
            err,
            CellError::LookupTypeMismatch {
                from: ColumnType::String,
                to: ColumnType::Int,
            }
        );
    }
}
