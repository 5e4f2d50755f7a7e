use super::Value;

/// Format a value for export. Null renders as the empty string.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Double(d) => format_double(*d),
        Value::Text(s) => s.clone(),
    }
}

/// Format a double so it always reads as one: `4.0`, not `4`.
pub fn format_double(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}
