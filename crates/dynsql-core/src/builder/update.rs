//! `UPDATE ... WHERE id = ?` builder.

use super::fields::Fields;
use super::statement::Statement;
use super::value::{SqlValue, ToSqlValue};
use crate::error::{BuildError, Result};
use crate::ident::Ident;

/// Column that identifies a row for [`update`].
pub const ID_COLUMN: &str = "id";

/// Builds `UPDATE {table} SET c1 = ?, c2 = ? WHERE id = ?`.
///
/// Parameters are the field values in insertion order followed by
/// `row_id`, which always binds to the trailing placeholder.
///
/// # Errors
///
/// Returns [`BuildError::EmptyAssignments`] when `fields` is empty.
pub fn update<V: ToSqlValue>(table: &Ident, row_id: V, fields: &Fields) -> Result<Statement> {
    if fields.is_empty() {
        return Err(BuildError::EmptyAssignments {
            statement: "UPDATE",
            table: table.to_string(),
        });
    }

    let mut sql = String::from("UPDATE ");
    sql.push_str(table.as_str());
    sql.push_str(" SET ");
    sql.push_str(&fields.equality_fragments().join(", "));
    sql.push_str(" WHERE ");
    sql.push_str(ID_COLUMN);
    sql.push_str(" = ");
    sql.push_str(SqlValue::placeholder());

    let mut params: Vec<SqlValue> = Vec::with_capacity(fields.len() + 1);
    params.extend(fields.values().cloned());
    params.push(row_id.to_sql_value());

    Ok(Statement::new(sql, params))
}
