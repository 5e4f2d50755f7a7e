//! Literal type validation.
//!
//! Checks a raw value against a column's declared type and returns the value
//! that should be stored. Numeric columns coerce: an `int` column stores
//! `Value::Int` whether it was sent `4`, `4.0` or `"4"`.

use super::{CellError, Column, ColumnType, Value};

/// Validate (and coerce) a literal for `column`.
///
/// Null is valid for every type. Lookup expressions never reach this; they
/// are handled by [`super::resolve_lookup`].
pub fn validate_literal(column: &Column, raw: Value) -> Result<Value, CellError> {
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let found = raw.kind_name();
    let coerced = match column.column_type {
        ColumnType::Boolean => match raw {
            Value::Bool(_) => Some(raw),
            _ => None,
        },
        ColumnType::Int => match raw {
            Value::Int(_) => Some(raw),
            Value::Double(d) => integral(d).map(Value::Int),
            Value::Text(s) => s.parse::<i64>().ok().map(Value::Int),
            _ => None,
        },
        ColumnType::Double => match raw {
            Value::Int(n) => Some(Value::Double(n as f64)),
            Value::Double(_) => Some(raw),
            Value::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|d| d.is_finite())
                .map(Value::Double),
            _ => None,
        },
        // Everything is representable as text at export time.
        ColumnType::String => Some(raw),
    };

    coerced.ok_or_else(|| {
        tracing::warn!(
            "Type validation failed for column {}: expected {}, got {}",
            column.name,
            column.column_type,
            found
        );
        CellError::InvalidLiteral {
            column: column.name.clone(),
            expected: column.column_type,
            found,
        }
    })
}

/// `d` as an integer, if it has no fractional part and fits in i64.
fn integral(d: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    if d.is_finite() && d.fract() == 0.0 && (-LIMIT..LIMIT).contains(&d) {
        Some(d as i64)
    } else {
        None
    }
}
