use thiserror::Error;

/// Error type shared by every fallible operation in the crate.
///
/// Driver failures are captured at the call site and tagged with the failure
/// class (connection, preparation, binding, execution); nothing from the
/// driver ever escapes as a panic.
#[derive(Debug, Error)]
pub enum SimpleSqlError {
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Statement preparation error: {0}")]
    PreparationError(String),

    #[error("Parameter binding error: {0}")]
    ParameterError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),

    #[error("Row access error: {0}")]
    RowAccessError(String),
}
