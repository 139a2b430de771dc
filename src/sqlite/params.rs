use std::fmt::Write;

use rusqlite::types::Value;

use crate::error::SimpleSqlError;
use crate::types::{ParamType, RowValues};

/// Coerce a [`RowValues`] to the storage class named by the binding hint.
///
/// Mirrors the loose casting of classic parameter binding: a `Text("42")`
/// bound with an [`Integer`](ParamType::Integer) hint is stored as the
/// integer 42. A `Null` value stays NULL under any hint, and the
/// [`Null`](ParamType::Null) hint forces NULL regardless of the value.
///
/// # Errors
/// Returns `SimpleSqlError::ParameterError` when the value cannot be
/// represented in the hinted class.
pub(crate) fn coerce_value(value: &RowValues, ty: ParamType) -> Result<Value, SimpleSqlError> {
    if value.is_null() {
        return Ok(Value::Null);
    }
    match ty {
        ParamType::Null => Ok(Value::Null),
        ParamType::Integer => coerce_integer(value),
        ParamType::Real => coerce_real(value),
        ParamType::Text => coerce_text(value),
        ParamType::Boolean => coerce_boolean(value),
        ParamType::Blob => coerce_blob(value),
    }
}

fn coerce_integer(value: &RowValues) -> Result<Value, SimpleSqlError> {
    match value {
        RowValues::Int(i) => Ok(Value::Integer(*i)),
        RowValues::Bool(b) => Ok(Value::Integer(i64::from(*b))),
        #[allow(clippy::cast_possible_truncation)]
        RowValues::Float(f) => Ok(Value::Integer(*f as i64)),
        RowValues::Text(s) => s.trim().parse::<i64>().map(Value::Integer).map_err(|_| {
            SimpleSqlError::ParameterError(format!("cannot bind `{s}` as an integer"))
        }),
        other => Err(mismatch(other, "integer")),
    }
}

fn coerce_real(value: &RowValues) -> Result<Value, SimpleSqlError> {
    match value {
        RowValues::Float(f) => Ok(Value::Real(*f)),
        #[allow(clippy::cast_precision_loss)]
        RowValues::Int(i) => Ok(Value::Real(*i as f64)),
        RowValues::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Real)
            .map_err(|_| SimpleSqlError::ParameterError(format!("cannot bind `{s}` as a real"))),
        other => Err(mismatch(other, "real")),
    }
}

fn coerce_text(value: &RowValues) -> Result<Value, SimpleSqlError> {
    match value {
        RowValues::Text(s) => Ok(Value::Text(s.clone())),
        RowValues::Int(i) => Ok(Value::Text(i.to_string())),
        RowValues::Float(f) => Ok(Value::Text(f.to_string())),
        RowValues::Bool(b) => Ok(Value::Text(if *b { "1" } else { "0" }.to_string())),
        RowValues::Timestamp(dt) => {
            let mut formatted = String::with_capacity(32);
            write!(formatted, "{}", dt.format("%F %T%.f")).map_err(|e| {
                SimpleSqlError::ParameterError(format!("cannot format timestamp: {e}"))
            })?;
            Ok(Value::Text(formatted))
        }
        RowValues::JSON(jval) => Ok(Value::Text(jval.to_string())),
        other => Err(mismatch(other, "text")),
    }
}

fn coerce_boolean(value: &RowValues) -> Result<Value, SimpleSqlError> {
    match value {
        RowValues::Bool(b) => Ok(Value::Integer(i64::from(*b))),
        RowValues::Int(i) => Ok(Value::Integer(i64::from(*i != 0))),
        other => Err(mismatch(other, "boolean")),
    }
}

fn coerce_blob(value: &RowValues) -> Result<Value, SimpleSqlError> {
    match value {
        RowValues::Blob(bytes) => Ok(Value::Blob(bytes.clone())),
        RowValues::Text(s) => Ok(Value::Blob(s.clone().into_bytes())),
        other => Err(mismatch(other, "blob")),
    }
}

fn mismatch(value: &RowValues, target: &str) -> SimpleSqlError {
    SimpleSqlError::ParameterError(format!("cannot bind {value:?} as {target}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn null_wins_over_any_hint() {
        assert_eq!(
            coerce_value(&RowValues::Null, ParamType::Integer).unwrap(),
            Value::Null
        );
        assert_eq!(
            coerce_value(&RowValues::Int(7), ParamType::Null).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn integer_hint_casts_compatible_values() {
        assert_eq!(
            coerce_value(&RowValues::Int(42), ParamType::Integer).unwrap(),
            Value::Integer(42)
        );
        assert_eq!(
            coerce_value(&RowValues::Text("42".into()), ParamType::Integer).unwrap(),
            Value::Integer(42)
        );
        assert_eq!(
            coerce_value(&RowValues::Bool(true), ParamType::Integer).unwrap(),
            Value::Integer(1)
        );
        assert!(coerce_value(&RowValues::Text("nope".into()), ParamType::Integer).is_err());
    }

    #[test]
    fn text_hint_stringifies_scalars() {
        assert_eq!(
            coerce_value(&RowValues::Int(5), ParamType::Text).unwrap(),
            Value::Text("5".into())
        );
        let dt = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(
            coerce_value(&RowValues::Timestamp(dt), ParamType::Text).unwrap(),
            Value::Text("2024-03-01 12:30:00".into())
        );
    }

    #[test]
    fn boolean_hint_normalises_to_zero_or_one() {
        assert_eq!(
            coerce_value(&RowValues::Int(17), ParamType::Boolean).unwrap(),
            Value::Integer(1)
        );
        assert_eq!(
            coerce_value(&RowValues::Bool(false), ParamType::Boolean).unwrap(),
            Value::Integer(0)
        );
        assert!(coerce_value(&RowValues::Text("yes".into()), ParamType::Boolean).is_err());
    }

    #[test]
    fn blob_hint_accepts_bytes_and_text() {
        assert_eq!(
            coerce_value(&RowValues::Blob(vec![1, 2]), ParamType::Blob).unwrap(),
            Value::Blob(vec![1, 2])
        );
        assert_eq!(
            coerce_value(&RowValues::Text("ab".into()), ParamType::Blob).unwrap(),
            Value::Blob(vec![b'a', b'b'])
        );
        assert!(coerce_value(&RowValues::Int(1), ParamType::Blob).is_err());
    }
}
