use rusqlite::types::Value;

use crate::error::SimpleSqlError;
use crate::types::RowValues;

/// Extract a [`RowValues`] from one column of a driver row.
///
/// # Errors
/// Returns the driver error if the column cannot be read.
pub(crate) fn extract_value(
    row: &rusqlite::Row<'_>,
    idx: usize,
) -> Result<RowValues, SimpleSqlError> {
    let value: Value = row.get(idx).map_err(SimpleSqlError::SqliteError)?;
    Ok(match value {
        Value::Null => RowValues::Null,
        Value::Integer(i) => RowValues::Int(i),
        Value::Real(f) => RowValues::Float(f),
        Value::Text(s) => RowValues::Text(s),
        Value::Blob(b) => RowValues::Blob(b),
    })
}
