use std::fmt;

use tracing::{debug, warn};

use crate::config::ConnectionConfig;
use crate::error::SimpleSqlError;
use crate::sqlite;
use crate::statement::PreparedStatement;

/// A single database connection and the configuration it was opened with.
///
/// A fresh `Connection` is disconnected; [`connect`](Self::connect) or
/// [`default_connect`](Self::default_connect) opens the driver handle and
/// [`is_connected`](Self::is_connected) reports whether that succeeded —
/// connect itself never propagates the failure. At most one live handle
/// exists per instance; statements prepared from it borrow the connection,
/// so it cannot be closed (or reconnected) while any of them is alive.
pub struct Connection {
    config: Option<ConnectionConfig>,
    handle: Option<rusqlite::Connection>,
    connected: bool,
}

impl Connection {
    /// A disconnected connection with no configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            handle: None,
            connected: false,
        }
    }

    /// Open a driver connection for `config`.
    ///
    /// The config is captured whether or not the attempt succeeds. On any
    /// failure the handle is cleared, the failure is logged, and
    /// [`is_connected`](Self::is_connected) turns false; no error reaches the
    /// caller.
    pub fn connect(&mut self, config: ConnectionConfig) {
        let dsn = config.dsn();
        match sqlite::open(&config) {
            Ok(handle) => {
                debug!(dsn = %dsn, "database connection established");
                self.handle = Some(handle);
                self.connected = true;
            }
            Err(err) => {
                warn!(dsn = %dsn, error = %err, "database connection failed");
                self.handle = None;
                self.connected = false;
            }
        }
        self.config = Some(config);
    }

    /// [`connect`](Self::connect) with [`ConnectionConfig::default`].
    pub fn default_connect(&mut self) {
        self.connect(ConnectionConfig::default());
    }

    /// True while a live driver handle is held.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Release the driver handle. Configuration fields are kept, so the
    /// connection can be reopened with the same config later.
    pub fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err((_, err)) = handle.close() {
                warn!(error = %err, "closing the driver connection reported an error");
            } else {
                debug!("database connection closed");
            }
        }
        self.connected = false;
    }

    /// Compile `sql` into a [`PreparedStatement`] bound to this connection.
    ///
    /// # Errors
    /// Returns `SimpleSqlError::ConnectionError` when disconnected and
    /// `SimpleSqlError::PreparationError` if the driver rejects the SQL.
    pub fn prepare_statement(&self, sql: &str) -> Result<PreparedStatement<'_>, SimpleSqlError> {
        let stmt = self.handle()?.prepare(sql).map_err(|e| {
            SimpleSqlError::PreparationError(format!("failed to prepare statement: {e}"))
        })?;
        Ok(PreparedStatement::new(stmt))
    }

    /// The last auto-generated row id, if it is positive.
    ///
    /// The driver reports 0 when no insert has produced an id on this
    /// connection; 0 and negative ids are folded into `None`, matching the
    /// historical contract of this interface.
    #[must_use]
    pub fn last_insert_id(&self) -> Option<i64> {
        let id = self.handle.as_ref()?.last_insert_rowid();
        (id > 0).then_some(id)
    }

    /// Begin a transaction, passing the driver's own signal through.
    ///
    /// # Errors
    /// Returns `SimpleSqlError::ExecutionError` if the driver refuses, e.g.
    /// when a transaction is already open.
    pub fn begin_transaction(&self) -> Result<(), SimpleSqlError> {
        self.transaction_command("BEGIN")
    }

    /// Commit the open transaction.
    ///
    /// # Errors
    /// Returns `SimpleSqlError::ExecutionError` if the driver refuses, e.g.
    /// when no transaction is active.
    pub fn commit(&self) -> Result<(), SimpleSqlError> {
        self.transaction_command("COMMIT")
    }

    /// Roll back the open transaction.
    ///
    /// # Errors
    /// Returns `SimpleSqlError::ExecutionError` if the driver refuses, e.g.
    /// when no transaction is active.
    pub fn rollback(&self) -> Result<(), SimpleSqlError> {
        self.transaction_command("ROLLBACK")
    }

    /// Escape and single-quote `text` for splicing into dynamic SQL.
    ///
    /// Parameter binding via [`PreparedStatement::set`] is the safe path;
    /// this exists for the fragments binding cannot reach.
    #[must_use]
    pub fn escape_and_quote(&self, text: &str) -> String {
        sqlite::quote_literal(text)
    }

    /// The data-source descriptor of the captured config, if any.
    #[must_use]
    pub fn dsn(&self) -> Option<String> {
        self.config.as_ref().map(ConnectionConfig::dsn)
    }

    /// The config captured by the last [`connect`](Self::connect) call.
    #[must_use]
    pub fn config(&self) -> Option<&ConnectionConfig> {
        self.config.as_ref()
    }

    /// Escape hatch to the backing driver connection, for advanced use only.
    #[must_use]
    pub fn raw_connection(&self) -> Option<&rusqlite::Connection> {
        self.handle.as_ref()
    }

    fn handle(&self) -> Result<&rusqlite::Connection, SimpleSqlError> {
        self.handle
            .as_ref()
            .ok_or_else(|| SimpleSqlError::ConnectionError("not connected to a database".into()))
    }

    fn transaction_command(&self, command: &str) -> Result<(), SimpleSqlError> {
        self.handle()?
            .execute_batch(command)
            .map_err(|e| SimpleSqlError::ExecutionError(format!("{command} failed: {e}")))
    }
}

impl Default for Connection {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("dsn", &self.dsn())
            .field("connected", &self.connected)
            .finish()
    }
}
