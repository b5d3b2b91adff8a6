//! # dynsql-sqlite
//!
//! Runs `dynsql-core` statements against an embedded SQLite database
//! through `sqlx`.
//!
//! A [`Database`] owns a single connection. Each mutating call builds its
//! statement, executes it in its own transaction and commits before
//! returning. When the engine rejects the statement, the transaction is
//! rolled back and an [`Error`] comes back instead.
//!
//! ## Example
//!
//! ```rust,no_run
//! use dynsql_sqlite::{Database, ErrorKind, Fields};
//!
//! # async fn run() -> dynsql_sqlite::Result<()> {
//! let mut db = Database::open("database.db").await?;
//!
//! // UPDATE tasks SET status = ? WHERE id = ?  with ("started", 2)
//! let fields = Fields::new().with("status", "started")?;
//! db.update("tasks", 2_i64, &fields).await?;
//!
//! // A misspelt column is reported, not fatal.
//! let typo = Fields::new().with("stat", "started")?;
//! if let Err(err) = db.update("tasks", 2_i64, &typo).await {
//!     assert_eq!(err.kind(), ErrorKind::Statement);
//!     eprintln!("{err}"); // no such column: stat
//! }
//!
//! // DELETE FROM tasks WHERE id = ?
//! db.delete_where("tasks", &Fields::new().with("id", 2_i64)?).await?;
//!
//! db.close().await?;
//! # Ok(())
//! # }
//! ```

mod database;
pub mod error;
mod row;

pub use database::{Database, ExecOutcome};
pub use error::{Error, ErrorKind, Result};
pub use row::Row;

pub use dynsql_core::builder::{Fields, SqlValue, Statement, ToSqlValue};
pub use dynsql_core::{builder, BuildError, Ident, IntoIdent};
