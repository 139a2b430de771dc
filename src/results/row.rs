use std::collections::HashMap;
use std::sync::Arc;

use crate::types::RowValues;

/// One associative row: column name to value.
///
/// Column names and the name-to-index table are shared with the cursor that
/// produced the row, so advancing through a large result set allocates only
/// the values themselves.
#[derive(Debug, Clone)]
pub struct Row {
    column_names: Arc<Vec<String>>,
    column_index: Arc<HashMap<String, usize>>,
    values: Vec<RowValues>,
}

impl Row {
    pub(crate) fn new(
        column_names: Arc<Vec<String>>,
        column_index: Arc<HashMap<String, usize>>,
        values: Vec<RowValues>,
    ) -> Self {
        Self {
            column_names,
            column_index,
            values,
        }
    }

    /// Get a value by column name, or None if the column is unknown.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        self.column_index
            .get(column_name)
            .and_then(|&idx| self.values.get(idx))
    }

    /// Get a value by column position, or None if out of bounds.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.values.get(index)
    }

    /// The column names of this row, in select order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// The values of this row, in select order.
    #[must_use]
    pub fn values(&self) -> &[RowValues] {
        &self.values
    }
}
