use std::fmt;
use std::sync::Arc;

use crate::error::SimpleSqlError;
use crate::results::StatementResult;
use crate::sqlite::params::coerce_value;
use crate::types::{ParamType, RowValues};

/// Identifies a statement parameter, by 1-based position or by name.
///
/// Named parameters carry their prefix, e.g. `":id"`. Both `usize` and
/// `&str` convert directly, so call sites pass `1` or `":id"` as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter<'a> {
    /// 1-based positional parameter
    Index(usize),
    /// Named parameter, prefix included (`":id"`)
    Name(&'a str),
}

impl From<usize> for Parameter<'_> {
    fn from(index: usize) -> Self {
        Parameter::Index(index)
    }
}

impl<'a> From<&'a str> for Parameter<'a> {
    fn from(name: &'a str) -> Self {
        Parameter::Name(name)
    }
}

/// A driver-compiled statement tied to the [`Connection`](crate::Connection)
/// that prepared it.
///
/// Bind parameters with [`set`](Self::set), then run the statement with
/// [`execute`](Self::execute) (no result rows) or [`query`](Self::query)
/// (rows expected). Bindings persist across executions, so a statement can be
/// re-bound and re-run.
pub struct PreparedStatement<'conn> {
    stmt: rusqlite::Statement<'conn>,
}

impl<'conn> PreparedStatement<'conn> {
    pub(crate) fn new(stmt: rusqlite::Statement<'conn>) -> Self {
        Self { stmt }
    }

    /// Bind `value` to a parameter, coerced to the storage class named by
    /// `ty`.
    ///
    /// # Errors
    /// Returns `SimpleSqlError::ParameterError` if the parameter does not
    /// exist, the value cannot be coerced, or the driver rejects the bind.
    pub fn set<'a>(
        &mut self,
        parameter: impl Into<Parameter<'a>>,
        value: &RowValues,
        ty: ParamType,
    ) -> Result<(), SimpleSqlError> {
        let index = match parameter.into() {
            Parameter::Index(index) => index,
            Parameter::Name(name) => self
                .stmt
                .parameter_index(name)
                .map_err(|e| {
                    SimpleSqlError::ParameterError(format!("cannot resolve parameter `{name}`: {e}"))
                })?
                .ok_or_else(|| {
                    SimpleSqlError::ParameterError(format!("unknown parameter `{name}`"))
                })?,
        };
        let coerced = coerce_value(value, ty)?;
        self.stmt.raw_bind_parameter(index, coerced).map_err(|e| {
            SimpleSqlError::ParameterError(format!("failed to bind parameter {index}: {e}"))
        })
    }

    /// Run the statement without returning rows, yielding the driver's own
    /// success signal: the number of rows changed.
    ///
    /// # Errors
    /// Returns `SimpleSqlError::ExecutionError` on any driver failure,
    /// including running a row-returning statement through this method (the
    /// driver refuses it; use [`query`](Self::query) instead).
    pub fn execute(&mut self) -> Result<usize, SimpleSqlError> {
        self.stmt
            .raw_execute()
            .map_err(|e| SimpleSqlError::ExecutionError(format!("statement execution failed: {e}")))
    }

    /// Run the statement and return a cursor over its rows. The cursor's
    /// construction performs the eager first fetch, so execution failures
    /// surface here rather than on the first advance.
    ///
    /// # Errors
    /// Returns the driver's execution error if stepping the statement fails.
    pub fn query(&mut self) -> Result<StatementResult<'_>, SimpleSqlError> {
        let column_names: Arc<Vec<String>> = Arc::new(
            self.stmt
                .column_names()
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        );
        let rows = self.stmt.raw_query();
        StatementResult::new(rows, column_names)
    }

    /// Escape hatch to the backing driver statement, for advanced use only.
    #[must_use]
    pub fn raw_statement(&self) -> &rusqlite::Statement<'conn> {
        &self.stmt
    }
}

impl fmt::Debug for PreparedStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedStatement")
            .field("parameter_count", &self.stmt.parameter_count())
            .finish()
    }
}
