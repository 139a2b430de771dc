//! `SQLite` driver layer: connection opening plus the value conversion
//! tables used for binding and row extraction.

pub(crate) mod params;
pub(crate) mod query;

use crate::config::ConnectionConfig;
use crate::error::SimpleSqlError;
use crate::types::DatabaseType;

/// Open a driver connection for the given config.
///
/// The driver segment of the descriptor must resolve to a supported engine
/// and the charset to an encoding the engine knows; the database field is the
/// filesystem path (or `:memory:`). Every driver failure surfaces as an `Err`
/// so the caller decides how to signal it.
///
/// # Errors
/// Returns `SimpleSqlError::ConfigError` for an unknown driver or charset and
/// `SimpleSqlError::ConnectionError` if the engine cannot open the database.
pub(crate) fn open(config: &ConnectionConfig) -> Result<rusqlite::Connection, SimpleSqlError> {
    match config.database_type()? {
        DatabaseType::Sqlite => {}
    }
    let encoding = encoding_for_charset(&config.charset)?;

    let conn = rusqlite::Connection::open(&config.database).map_err(|e| {
        SimpleSqlError::ConnectionError(format!(
            "failed to open database `{}`: {e}",
            config.database
        ))
    })?;

    // The encoding pragma only takes effect before the database file is
    // created; on an existing database it is accepted and ignored.
    conn.execute_batch(&format!("PRAGMA encoding = '{encoding}';"))
        .map_err(|e| {
            SimpleSqlError::ConnectionError(format!("failed to apply charset `{encoding}`: {e}"))
        })?;

    Ok(conn)
}

fn encoding_for_charset(charset: &str) -> Result<&'static str, SimpleSqlError> {
    match charset.to_ascii_lowercase().as_str() {
        "utf8" | "utf-8" => Ok("UTF-8"),
        "utf16" | "utf-16" => Ok("UTF-16"),
        "utf16le" | "utf-16le" => Ok("UTF-16le"),
        "utf16be" | "utf-16be" => Ok("UTF-16be"),
        other => Err(SimpleSqlError::ConfigError(format!(
            "unsupported charset `{other}`"
        ))),
    }
}

/// Escape a string following the engine's literal rule and wrap it in single
/// quotes, for splicing into dynamic SQL where binding is not used.
///
/// `rusqlite` exposes no quoting primitive, so the `SQLite` rule (double any
/// embedded single quote) lives here.
#[must_use]
pub fn quote_literal(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            quoted.push('\'');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}
