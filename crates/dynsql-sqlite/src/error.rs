//! Error types for statement execution.

use dynsql_core::BuildError;
use thiserror::Error;

/// Errors returned by [`crate::Database`].
///
/// None of these are fatal: every failure comes back as a value and the
/// connection stays usable (except after a failed [`crate::Database::close`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The database could not be opened.
    #[error("cannot open database '{location}': {source}")]
    Connection {
        /// Path or URL that was being opened.
        location: String,
        /// Underlying driver error.
        #[source]
        source: sqlx::Error,
    },

    /// The engine rejected or failed a statement. Nothing was committed.
    #[error("{}", engine_message(.source))]
    Statement {
        /// Text of the failed statement.
        sql: String,
        /// Underlying driver error.
        #[source]
        source: sqlx::Error,
    },

    /// The call was malformed and no SQL was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] BuildError),

    /// Closing the connection failed.
    #[error("error closing database: {0}")]
    Closing(#[source] sqlx::Error),
}

/// Broad category of an [`Error`], for callers that branch on failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Storage unreachable or connection lost.
    Connection,
    /// Operational failure: bad SQL, unknown table or column, constraint.
    Statement,
    /// Rejected before any SQL was built.
    InvalidArgument,
}

impl Error {
    pub(crate) fn statement(sql: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Statement {
            sql: sql.into(),
            source,
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection { .. } | Self::Closing(_) => ErrorKind::Connection,
            Self::Statement { .. } => ErrorKind::Statement,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// Returns the SQL of a failed statement.
    #[must_use]
    pub fn sql(&self) -> Option<&str> {
        match self {
            Self::Statement { sql, .. } => Some(sql),
            _ => None,
        }
    }
}

/// The engine's own message for database errors, e.g. `no such column: stat`.
fn engine_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_kind() {
        let err = Error::from(BuildError::EmptyConditions {
            table: String::from("tasks"),
        });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.sql().is_none());
        assert!(err.to_string().starts_with("invalid argument: DELETE on 'tasks'"));
    }

    #[test]
    fn test_statement_kind_keeps_sql() {
        let err = Error::statement("SELECT 1", sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), ErrorKind::Statement);
        assert_eq!(err.sql(), Some("SELECT 1"));
    }
}
