//! Command-line arguments.

use clap::{Parser, Subcommand};
use dynsql_sqlite::{BuildError, Fields, SqlValue};

/// Create, read, update and delete rows in an embedded SQLite database.
#[derive(Debug, Parser)]
#[command(name = "dynsql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database URL or path (e.g. `sqlite:database.db`).
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite:database.db")]
    pub database: String,

    /// Enable verbose output (logs every statement).
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the sample `projects` and `tasks` tables and seed them.
    Init,

    /// Print the rows of a table.
    List {
        /// Table name.
        table: String,

        /// Only rows where COLUMN equals VALUE (repeatable, AND-joined).
        #[arg(
            short = 'w',
            long = "where",
            value_name = "COLUMN=VALUE",
            value_parser = parse_assignment
        )]
        conditions: Vec<Assignment>,
    },

    /// Insert one row.
    Insert {
        /// Table name.
        table: String,

        /// Column value for the new row (repeatable).
        #[arg(
            short = 's',
            long = "set",
            value_name = "COLUMN=VALUE",
            value_parser = parse_assignment
        )]
        fields: Vec<Assignment>,
    },

    /// Update the row with the given id.
    Update {
        /// Table name.
        table: String,

        /// Value of the row's `id` column.
        id: i64,

        /// New column value (repeatable).
        #[arg(
            short = 's',
            long = "set",
            value_name = "COLUMN=VALUE",
            value_parser = parse_assignment
        )]
        fields: Vec<Assignment>,
    },

    /// Count the rows of a table.
    Count {
        /// Table name.
        table: String,

        /// Only rows where COLUMN equals VALUE (repeatable, AND-joined).
        #[arg(
            short = 'w',
            long = "where",
            value_name = "COLUMN=VALUE",
            value_parser = parse_assignment
        )]
        conditions: Vec<Assignment>,
    },

    /// Delete the rows matching every condition.
    Delete {
        /// Table name.
        table: String,

        /// Condition (repeatable, AND-joined).
        #[arg(
            short = 'w',
            long = "where",
            value_name = "COLUMN=VALUE",
            value_parser = parse_assignment
        )]
        conditions: Vec<Assignment>,
    },

    /// Delete every row of a table.
    DeleteAll {
        /// Table name.
        table: String,

        /// Confirm that every row should be removed.
        #[arg(long)]
        yes: bool,
    },

    /// Walk through seed, update, a failing update, and delete.
    Demo,
}

/// A `COLUMN=VALUE` pair from the command line.
pub type Assignment = (String, SqlValue);

/// Parses `COLUMN=VALUE`, splitting on the first `=`.
pub fn parse_assignment(s: &str) -> Result<Assignment, String> {
    let (column, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=VALUE, got '{s}'"))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column name in '{s}'"));
    }
    Ok((column.to_string(), parse_value(value)))
}

/// Interprets a command-line value.
///
/// `null`, `true`/`false`, integers and decimals map to their SQL types.
/// Text wrapped in single quotes is always text, with the quotes removed.
/// Anything else is text as given.
pub fn parse_value(raw: &str) -> SqlValue {
    if let Some(text) = raw
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        return SqlValue::Text(text.to_string());
    }
    if raw.eq_ignore_ascii_case("null") {
        return SqlValue::Null;
    }
    match raw {
        "true" => return SqlValue::Bool(true),
        "false" => return SqlValue::Bool(false),
        _ => {}
    }
    if let Ok(n) = raw.parse::<i64>() {
        return SqlValue::Int(n);
    }
    let numeric = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if numeric && raw.chars().any(|c| c.is_ascii_digit()) {
        if let Ok(x) = raw.parse::<f64>() {
            return SqlValue::Float(x);
        }
    }
    SqlValue::Text(raw.to_string())
}

/// Collects parsed pairs into validated [`Fields`].
pub fn to_fields(pairs: Vec<Assignment>) -> Result<Fields, BuildError> {
    Fields::try_from_pairs(pairs)
}
