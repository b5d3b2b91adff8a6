//! DELETE builders.
//!
//! [`delete_where`] rejects an empty condition list. Removing every row
//! goes through [`delete_all`].

use super::fields::Fields;
use super::statement::Statement;
use crate::error::{BuildError, Result};
use crate::ident::Ident;

/// Builds `DELETE FROM {table} WHERE c1 = ? AND c2 = ?`.
///
/// Each condition compares with `=`, so a `NULL` value matches no row.
///
/// # Errors
///
/// Returns [`BuildError::EmptyConditions`] when `conditions` is empty.
pub fn delete_where(table: &Ident, conditions: &Fields) -> Result<Statement> {
    if conditions.is_empty() {
        return Err(BuildError::EmptyConditions {
            table: table.to_string(),
        });
    }

    let mut sql = String::from("DELETE FROM ");
    sql.push_str(table.as_str());
    sql.push_str(" WHERE ");
    sql.push_str(&conditions.equality_fragments().join(" AND "));

    Ok(Statement::new(sql, conditions.values().cloned().collect()))
}

/// Builds `DELETE FROM {table}`, which removes every row.
#[must_use]
pub fn delete_all(table: &Ident) -> Statement {
    let mut sql = String::from("DELETE FROM ");
    sql.push_str(table.as_str());
    Statement::new(sql, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::value::SqlValue;

    fn tasks() -> Ident {
        Ident::new("tasks").unwrap()
    }

    #[test]
    fn test_single_condition() {
        let conditions = Fields::new().with("id", 2_i64).unwrap();
        let stmt = delete_where(&tasks(), &conditions).unwrap();

        assert_eq!(stmt.sql(), "DELETE FROM tasks WHERE id = ?");
        assert_eq!(stmt.params(), &[SqlValue::Int(2)]);
    }

    #[test]
    fn test_conditions_joined_with_and() {
        let conditions = Fields::new()
            .with("project_id", 1_i64)
            .unwrap()
            .with("status", "Ukończone")
            .unwrap();
        let stmt = delete_where(&tasks(), &conditions).unwrap();

        assert_eq!(
            stmt.sql(),
            "DELETE FROM tasks WHERE project_id = ? AND status = ?"
        );
        assert_eq!(
            stmt.params(),
            &[SqlValue::Int(1), SqlValue::Text(String::from("Ukończone"))]
        );
    }

    #[test]
    fn test_condition_count_matches_params() {
        for n in 1..6_i64 {
            let pairs: Vec<(String, i64)> = (0..n).map(|i| (format!("c{i}"), i * 10)).collect();
            let conditions = Fields::try_from_pairs(pairs).unwrap();
            let stmt = delete_where(&tasks(), &conditions).unwrap();

            let n = usize::try_from(n).unwrap();
            assert_eq!(stmt.sql().matches(" = ?").count(), n);
            assert_eq!(stmt.sql().matches(" AND ").count(), n - 1);
            let expected: Vec<SqlValue> = conditions.values().cloned().collect();
            assert_eq!(stmt.params(), expected.as_slice());
        }
    }

    #[test]
    fn test_empty_conditions_rejected() {
        let err = delete_where(&tasks(), &Fields::new()).unwrap_err();
        assert!(matches!(err, BuildError::EmptyConditions { table } if table == "tasks"));
    }

    #[test]
    fn test_delete_all() {
        let stmt = delete_all(&tasks());

        assert_eq!(stmt.sql(), "DELETE FROM tasks");
        assert!(stmt.params().is_empty());
    }

    #[test]
    fn test_sql_injection_prevention() {
        let malicious = "1 OR 1=1";
        let conditions = Fields::new().with("id", malicious).unwrap();
        let stmt = delete_where(&tasks(), &conditions).unwrap();

        assert_eq!(stmt.sql(), "DELETE FROM tasks WHERE id = ?");
        assert!(matches!(&stmt.params()[0], SqlValue::Text(s) if s == malicious));
    }
}
