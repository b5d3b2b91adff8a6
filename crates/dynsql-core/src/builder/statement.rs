//! Built statements.

use std::fmt;

use super::value::SqlValue;

/// SQL text with `?` placeholders plus the values bound to them, in order.
///
/// Only the builders in this crate create statements, and they only ever
/// interpolate [`crate::Ident`]s, which cannot contain `?`. Every `?` in the
/// text is therefore a placeholder and lines up with `params` one for one.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlValue>,
}

impl Statement {
    pub(crate) fn new(sql: String, params: Vec<SqlValue>) -> Self {
        let stmt = Self { sql, params };
        debug_assert_eq!(stmt.placeholder_count(), stmt.params.len());
        stmt
    }

    /// The statement text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bound values, in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Number of `?` placeholders in the text.
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// Splits the statement into its text and parameters.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
