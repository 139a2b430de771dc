//! Lightweight synchronous wrapper around a SQL driver.
//!
//! Three cooperating objects cover the whole surface: a [`Connection`] opens
//! the driver handle and compiles statements, a [`PreparedStatement`] binds
//! parameters and executes, and a [`StatementResult`] walks the rows of a
//! data-returning execution one associative row at a time. Everything is
//! synchronous and blocking; each instance belongs to one logical caller.
//!
//! ```rust
//! use simple_sql::{Connection, ConnectionConfig, ParamType, RowValues};
//!
//! let mut conn = Connection::new();
//! conn.connect(ConnectionConfig::default().with_database(":memory:"));
//! assert!(conn.is_connected());
//!
//! let mut create = conn.prepare_statement("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT)")?;
//! create.execute()?;
//!
//! let mut insert = conn.prepare_statement("INSERT INTO users (name) VALUES (:name)")?;
//! insert.set(":name", &RowValues::Text("alice".into()), ParamType::Text)?;
//! insert.execute()?;
//! assert_eq!(conn.last_insert_id(), Some(1));
//!
//! let mut select = conn.prepare_statement("SELECT name FROM users WHERE id = ?1")?;
//! select.set(1, &RowValues::Int(1), ParamType::Integer)?;
//! let mut result = select.query()?;
//! while result.have_row() {
//!     assert_eq!(result.get_from_row("name")?.as_text(), Some("alice"));
//!     result.next_row()?;
//! }
//! result.close();
//! # Ok::<(), simple_sql::SimpleSqlError>(())
//! ```

mod config;
mod connection;
mod error;
mod results;
mod statement;
mod types;

pub mod prelude;
pub mod sqlite;

pub use config::{
    ConnectionConfig, DEFAULT_CHARSET, DEFAULT_DATABASE_NAME, DEFAULT_DRIVER_NAME,
    DEFAULT_PASSWORD, DEFAULT_SERVER_NAME, DEFAULT_USERNAME,
};
pub use connection::Connection;
pub use error::SimpleSqlError;
pub use results::{Row, StatementResult};
pub use statement::{Parameter, PreparedStatement};
pub use types::{DatabaseType, ParamType, RowValues};
