//! Insertion-ordered column/value pairs.

use std::slice;

use super::value::{SqlValue, ToSqlValue};
use crate::error::Result;
use crate::ident::{Ident, IntoIdent};

/// An ordered list of column assignments.
///
/// Serves as the SET list of an UPDATE, the match list of a WHERE clause
/// and the column/value list of an INSERT. Iteration follows insertion
/// order, which is also the order of the generated placeholders and bound
/// parameters.
///
/// Setting a column that is already present replaces its value and keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(Ident, SqlValue)>,
}

impl Fields {
    /// Creates an empty set of fields.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a column assignment, builder style.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuildError::InvalidIdentifier`] when `column` is
    /// not a valid identifier.
    pub fn with<C: IntoIdent, V: ToSqlValue>(mut self, column: C, value: V) -> Result<Self> {
        self.set(column, value)?;
        Ok(self)
    }

    /// Sets `column` to `value`, returning the value it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuildError::InvalidIdentifier`] when `column` is
    /// not a valid identifier.
    pub fn set<C: IntoIdent, V: ToSqlValue>(
        &mut self,
        column: C,
        value: V,
    ) -> Result<Option<SqlValue>> {
        let column = column.into_ident()?;
        let value = value.to_sql_value();
        if let Some(slot) = self.entries.iter_mut().find(|(c, _)| *c == column) {
            return Ok(Some(std::mem::replace(&mut slot.1, value)));
        }
        self.entries.push((column, value));
        Ok(None)
    }

    /// Builds fields from `(column, value)` pairs.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid column name.
    pub fn try_from_pairs<I, C, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, V)>,
        C: IntoIdent,
        V: ToSqlValue,
    {
        let mut fields = Self::new();
        for (column, value) in pairs {
            fields.set(column, value)?;
        }
        Ok(fields)
    }

    /// Returns the value assigned to `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(c, _)| c.as_str() == column)
            .map(|(_, v)| v)
    }

    /// Number of assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when there are no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over assignments in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, (Ident, SqlValue)> {
        self.entries.iter()
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &Ident> {
        self.entries.iter().map(|(c, _)| c)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// `col = ?` for every column, in order.
    pub(crate) fn equality_fragments(&self) -> Vec<String> {
        self.columns()
            .map(|c| format!("{c} = {}", SqlValue::placeholder()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a (Ident, SqlValue);
    type IntoIter = slice::Iter<'a, (Ident, SqlValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_insertion_order() {
        let fields = Fields::new()
            .with("status", "started")
            .unwrap()
            .with("end_date", "2024-03-01")
            .unwrap()
            .with("project_id", 3_i64)
            .unwrap();

        let columns: Vec<&str> = fields.columns().map(Ident::as_str).collect();
        assert_eq!(columns, ["status", "end_date", "project_id"]);
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut fields = Fields::try_from_pairs([("a", 1_i64), ("b", 2_i64)]).unwrap();
        let previous = fields.set("a", 10_i64).unwrap();

        assert_eq!(previous, Some(SqlValue::Int(1)));
        assert_eq!(fields.len(), 2);
        let values: Vec<&SqlValue> = fields.values().collect();
        assert_eq!(values, [&SqlValue::Int(10), &SqlValue::Int(2)]);
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        assert!(Fields::new().with("status; --", "x").is_err());
    }

    #[test]
    fn test_get() {
        let fields = Fields::new().with("qty", 5_i64).unwrap();
        assert_eq!(fields.get("qty"), Some(&SqlValue::Int(5)));
        assert_eq!(fields.get("missing"), None);
    }

    #[test]
    fn test_equality_fragments() {
        let fields = Fields::try_from_pairs([("id", 1_i64), ("status", 0_i64)]).unwrap();
        assert_eq!(fields.equality_fragments(), ["id = ?", "status = ?"]);
    }
}
