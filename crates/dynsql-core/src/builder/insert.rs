//! Single-row INSERT builder.

use super::fields::Fields;
use super::statement::Statement;
use super::value::SqlValue;
use crate::error::{BuildError, Result};
use crate::ident::Ident;

/// Builds `INSERT INTO {table} (c1, c2) VALUES (?, ?)`.
///
/// # Errors
///
/// Returns [`BuildError::EmptyAssignments`] when `fields` is empty.
pub fn insert(table: &Ident, fields: &Fields) -> Result<Statement> {
    if fields.is_empty() {
        return Err(BuildError::EmptyAssignments {
            statement: "INSERT",
            table: table.to_string(),
        });
    }

    let columns: Vec<&str> = fields.columns().map(Ident::as_str).collect();
    let placeholders: Vec<&str> = fields.iter().map(|_| SqlValue::placeholder()).collect();

    let mut sql = String::from("INSERT INTO ");
    sql.push_str(table.as_str());
    sql.push_str(" (");
    sql.push_str(&columns.join(", "));
    sql.push_str(") VALUES (");
    sql.push_str(&placeholders.join(", "));
    sql.push(')');

    Ok(Statement::new(sql, fields.values().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_insert() {
        let table = Ident::new("projects").unwrap();
        let fields = Fields::new()
            .with("nazwa", "Projekt 1")
            .unwrap()
            .with("start_date", "2024-01-01")
            .unwrap()
            .with("end_date", None::<&str>)
            .unwrap();
        let stmt = insert(&table, &fields).unwrap();

        assert_eq!(
            stmt.sql(),
            "INSERT INTO projects (nazwa, start_date, end_date) VALUES (?, ?, ?)"
        );
        assert_eq!(
            stmt.params(),
            &[
                SqlValue::Text(String::from("Projekt 1")),
                SqlValue::Text(String::from("2024-01-01")),
                SqlValue::Null,
            ]
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        let table = Ident::new("projects").unwrap();
        let err = insert(&table, &Fields::new()).unwrap_err();
        assert!(matches!(
            err,
            BuildError::EmptyAssignments {
                statement: "INSERT",
                ..
            }
        ));
    }
}
