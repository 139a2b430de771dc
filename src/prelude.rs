//! Convenient imports for common functionality.

pub use crate::{
    Connection, ConnectionConfig, DatabaseType, ParamType, Parameter, PreparedStatement, Row,
    RowValues, SimpleSqlError, StatementResult,
};
