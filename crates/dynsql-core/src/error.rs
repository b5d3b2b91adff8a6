//! Errors raised while building a statement.

use thiserror::Error;

/// A call that cannot be turned into a well-formed statement.
///
/// These are caller mistakes: they are detected before any SQL text is
/// produced, so nothing ever reaches the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A table or column name is not a plain identifier.
    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdentifier {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An UPDATE or INSERT was given no columns.
    #[error("{statement} on '{table}' needs at least one column")]
    EmptyAssignments {
        /// `UPDATE` or `INSERT`.
        statement: &'static str,
        /// Target table.
        table: String,
    },

    /// A conditional DELETE was given no conditions.
    #[error("DELETE on '{table}' needs at least one condition; use delete_all to remove every row")]
    EmptyConditions {
        /// Target table.
        table: String,
    },
}

/// Result type for statement building.
pub type Result<T> = std::result::Result<T, BuildError>;
