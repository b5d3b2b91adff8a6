//! `SELECT` builders.
//!
//! Conditions compare with `col = ?`. A [`SqlValue::Null`] condition
//! therefore never matches, not even rows whose column is NULL.

use super::fields::Fields;
use super::statement::Statement;
use super::value::SqlValue;
use crate::ident::Ident;

/// Builds `SELECT * FROM {table}`.
#[must_use]
pub fn select_all(table: &Ident) -> Statement {
    let mut sql = String::from("SELECT * FROM ");
    sql.push_str(table.as_str());
    Statement::new(sql, vec![])
}

/// Builds `SELECT * FROM {table} WHERE c1 = ? AND c2 = ?`.
///
/// With no conditions this is the same as [`select_all`].
#[must_use]
pub fn select_where(table: &Ident, conditions: &Fields) -> Statement {
    filtered("SELECT * FROM ", table, conditions)
}

/// Builds `SELECT COUNT(*) FROM {table} WHERE c1 = ? AND c2 = ?`.
///
/// With no conditions every row is counted.
#[must_use]
pub fn count_where(table: &Ident, conditions: &Fields) -> Statement {
    filtered("SELECT COUNT(*) FROM ", table, conditions)
}

fn filtered(prefix: &str, table: &Ident, conditions: &Fields) -> Statement {
    let mut sql = String::from(prefix);
    sql.push_str(table.as_str());
    if conditions.is_empty() {
        return Statement::new(sql, vec![]);
    }

    sql.push_str(" WHERE ");
    sql.push_str(&conditions.equality_fragments().join(" AND "));

    Statement::new(sql, conditions.values().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all() {
        let stmt = select_all(&Ident::new("tasks").unwrap());
        assert_eq!(stmt.sql(), "SELECT * FROM tasks");
        assert!(stmt.params().is_empty());
    }

    #[test]
    fn test_select_where() {
        let conditions = Fields::new()
            .with("status", "W trakcie")
            .unwrap()
            .with("project_id", 2_i64)
            .unwrap();
        let stmt = select_where(&Ident::new("tasks").unwrap(), &conditions);

        assert_eq!(
            stmt.sql(),
            "SELECT * FROM tasks WHERE status = ? AND project_id = ?"
        );
        assert_eq!(
            stmt.params(),
            &[SqlValue::Text(String::from("W trakcie")), SqlValue::Int(2)]
        );
    }

    #[test]
    fn test_select_where_without_conditions() {
        let table = Ident::new("tasks").unwrap();
        assert_eq!(select_where(&table, &Fields::new()), select_all(&table));
    }

    #[test]
    fn test_count_where() {
        let table = Ident::new("tasks").unwrap();
        let conditions = Fields::new().with("project_id", 1_i64).unwrap();

        let stmt = count_where(&table, &conditions);
        assert_eq!(stmt.sql(), "SELECT COUNT(*) FROM tasks WHERE project_id = ?");
        assert_eq!(stmt.params(), &[SqlValue::Int(1)]);

        let all = count_where(&table, &Fields::new());
        assert_eq!(all.sql(), "SELECT COUNT(*) FROM tasks");
        assert!(all.params().is_empty());
    }

    #[test]
    fn test_null_condition_is_bound_like_any_value() {
        let conditions = Fields::new().with("note", SqlValue::Null).unwrap();
        let stmt = select_where(&Ident::new("tasks").unwrap(), &conditions);

        assert_eq!(stmt.sql(), "SELECT * FROM tasks WHERE note = ?");
        assert_eq!(stmt.params(), &[SqlValue::Null]);
    }
}
