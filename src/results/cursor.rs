use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rusqlite::Rows;

use crate::error::SimpleSqlError;
use crate::sqlite::query::extract_value;
use crate::types::RowValues;

use super::row::Row;

/// Cursor over the rows of a data-returning execution.
///
/// The cursor is always in one of two states: it has a current row, or it is
/// exhausted. Construction performs one eager fetch, so `have_row` answers
/// immediately whether the query produced anything. The backing driver cursor
/// is released as soon as the rows run out; advancing an exhausted cursor is
/// a no-op.
///
/// Iteration protocol:
/// ```rust
/// # use simple_sql::{Connection, ConnectionConfig};
/// # let mut conn = Connection::new();
/// # conn.connect(ConnectionConfig::default().with_database(":memory:"));
/// # let mut stmt = conn.prepare_statement("SELECT 1 AS x")?;
/// let mut result = stmt.query()?;
/// while result.have_row() {
///     let x = result.get_from_row("x")?;
///     assert_eq!(x.as_int(), Some(&1));
///     result.next_row()?;
/// }
/// result.close();
/// # Ok::<(), simple_sql::SimpleSqlError>(())
/// ```
pub struct StatementResult<'stmt> {
    rows: Option<Rows<'stmt>>,
    column_names: Arc<Vec<String>>,
    column_index: Arc<HashMap<String, usize>>,
    have_row: bool,
    row: Option<Row>,
}

impl<'stmt> StatementResult<'stmt> {
    /// Wrap a driver cursor and eagerly fetch the first row.
    ///
    /// # Errors
    /// Returns the driver error if stepping to the first row fails; this is
    /// where execution errors of the underlying statement surface.
    pub(crate) fn new(
        rows: Rows<'stmt>,
        column_names: Arc<Vec<String>>,
    ) -> Result<Self, SimpleSqlError> {
        let column_index = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect::<HashMap<_, _>>(),
        );
        let mut result = Self {
            rows: Some(rows),
            column_names,
            column_index,
            have_row: false,
            row: None,
        };
        result.fetch_next()?;
        Ok(result)
    }

    fn fetch_next(&mut self) -> Result<(), SimpleSqlError> {
        match self.try_fetch() {
            Ok(Some(row)) => {
                self.have_row = true;
                self.row = Some(row);
                Ok(())
            }
            Ok(None) => {
                self.rows = None;
                self.have_row = false;
                self.row = None;
                Ok(())
            }
            Err(err) => {
                self.rows = None;
                self.have_row = false;
                self.row = None;
                Err(err)
            }
        }
    }

    fn try_fetch(&mut self) -> Result<Option<Row>, SimpleSqlError> {
        let Some(rows) = self.rows.as_mut() else {
            return Ok(None);
        };
        let Some(fetched) = rows.next()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(self.column_names.len());
        for idx in 0..self.column_names.len() {
            values.push(extract_value(fetched, idx)?);
        }
        Ok(Some(Row::new(
            Arc::clone(&self.column_names),
            Arc::clone(&self.column_index),
            values,
        )))
    }

    /// True while the cursor has a current row.
    #[must_use]
    pub fn have_row(&self) -> bool {
        self.have_row
    }

    /// Value of `column_name` in the current row.
    ///
    /// # Errors
    /// Returns `SimpleSqlError::RowAccessError` if the cursor is exhausted or
    /// the column name is unknown; check [`have_row`](Self::have_row) first.
    pub fn get_from_row(&self, column_name: &str) -> Result<&RowValues, SimpleSqlError> {
        let row = self.row.as_ref().ok_or_else(|| {
            SimpleSqlError::RowAccessError("no current row; check have_row() first".to_string())
        })?;
        row.get(column_name).ok_or_else(|| {
            SimpleSqlError::RowAccessError(format!("unknown column `{column_name}`"))
        })
    }

    /// The full current row, or None once the cursor is exhausted.
    #[must_use]
    pub fn row(&self) -> Option<&Row> {
        self.row.as_ref()
    }

    /// Column names of the result, in select order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Advance to the next row. A no-op once the cursor is exhausted.
    ///
    /// # Errors
    /// Returns the driver error if the fetch fails; the cursor is left
    /// exhausted in that case.
    pub fn next_row(&mut self) -> Result<(), SimpleSqlError> {
        self.fetch_next()
    }

    /// Release the driver cursor and force the exhausted state.
    ///
    /// Dropping the driver rows resets the backing statement, which covers
    /// engines where an explicit cursor close is unnecessary. Safe to call
    /// repeatedly.
    pub fn close(&mut self) {
        self.rows = None;
        self.have_row = false;
        self.row = None;
    }
}

impl fmt::Debug for StatementResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementResult")
            .field("column_names", &self.column_names)
            .field("have_row", &self.have_row)
            .finish()
    }
}
