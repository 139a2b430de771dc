use serde::{Deserialize, Serialize};

use crate::error::SimpleSqlError;
use crate::types::DatabaseType;

/// Default driver name used by [`ConnectionConfig::default`].
pub const DEFAULT_DRIVER_NAME: &str = "sqlite";
/// Default server name used by [`ConnectionConfig::default`].
pub const DEFAULT_SERVER_NAME: &str = "localhost";
/// Default database name used by [`ConnectionConfig::default`].
pub const DEFAULT_DATABASE_NAME: &str = "main_database";
/// Default charset used by [`ConnectionConfig::default`].
pub const DEFAULT_CHARSET: &str = "utf8";
/// Default username used by [`ConnectionConfig::default`].
pub const DEFAULT_USERNAME: &str = "root";
/// Default password used by [`ConnectionConfig::default`].
pub const DEFAULT_PASSWORD: &str = "";

/// Connection settings for a [`Connection`](crate::Connection).
///
/// The full descriptor shape (driver, host, database, charset, credentials)
/// is kept for every engine; the `sqlite` driver reads `database` as the
/// filesystem path (or `:memory:`) and records the remaining fields without
/// consulting them, the same way in-process engines treat server-oriented
/// DSN components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Driver name, the scheme segment of the descriptor
    pub driver: String,
    /// Server host name
    pub host: String,
    /// Database name; the filesystem path for the `sqlite` driver
    pub database: String,
    /// Connection character set
    pub charset: String,
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            driver: DEFAULT_DRIVER_NAME.to_string(),
            host: DEFAULT_SERVER_NAME.to_string(),
            database: DEFAULT_DATABASE_NAME.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl ConnectionConfig {
    /// Build a config from all six descriptor fields.
    pub fn new(
        driver: impl Into<String>,
        host: impl Into<String>,
        database: impl Into<String>,
        charset: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            driver: driver.into(),
            host: host.into(),
            database: database.into(),
            charset: charset.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = driver.into();
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    #[must_use]
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// The data-source descriptor for this config, in the form
    /// `driver:host=<host>;dbname=<database>;charset=<charset>`.
    #[must_use]
    pub fn dsn(&self) -> String {
        format!(
            "{}:host={};dbname={};charset={}",
            self.driver, self.host, self.database, self.charset
        )
    }

    /// Resolve the driver segment to a supported engine.
    ///
    /// # Errors
    /// Returns `SimpleSqlError::ConfigError` if the driver name is not
    /// recognised.
    pub fn database_type(&self) -> Result<DatabaseType, SimpleSqlError> {
        DatabaseType::from_driver_name(&self.driver).ok_or_else(|| {
            SimpleSqlError::ConfigError(format!("unsupported driver `{}`", self.driver))
        })
    }
}
