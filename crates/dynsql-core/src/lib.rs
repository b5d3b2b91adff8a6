//! # dynsql-core
//!
//! Builders that turn a table name, an ordered set of column/value pairs
//! and (for updates) a row id into parameterized SQL.
//!
//! This crate provides:
//! - [`Ident`], a validated table/column name, the only thing ever
//!   interpolated into statement text
//! - [`Fields`], an insertion-ordered list of column assignments
//! - [`Statement`], the immutable pair of SQL text and ordered parameters
//! - Builders for `UPDATE ... WHERE id = ?`, conditional and unconditional
//!   `DELETE`, single-row `INSERT` and `SELECT *`/`SELECT COUNT(*)`
//!
//! Nothing here performs I/O; `dynsql-sqlite` executes the statements.
//!
//! ## Example
//!
//! ```rust
//! use dynsql_core::{builder, Fields, Ident, SqlValue};
//!
//! let table = Ident::new("tasks")?;
//! let fields = Fields::new().with("status", "started")?;
//! let stmt = builder::update(&table, 2_i64, &fields)?;
//!
//! assert_eq!(stmt.sql(), "UPDATE tasks SET status = ? WHERE id = ?");
//! assert_eq!(
//!     stmt.params(),
//!     &[SqlValue::Text(String::from("started")), SqlValue::Int(2)]
//! );
//! # Ok::<(), dynsql_core::BuildError>(())
//! ```
//!
//! ## SQL Injection
//!
//! Values are always bound as parameters. Identifiers cannot be bound, so
//! they are checked once when an [`Ident`] is created:
//!
//! ```rust
//! use dynsql_core::Ident;
//!
//! assert!(Ident::new("tasks; DROP TABLE tasks").is_err());
//! ```

pub mod builder;
pub mod error;
pub mod ident;

pub use builder::{Fields, SqlValue, Statement, ToSqlValue};
pub use error::BuildError;
pub use ident::{Ident, IntoIdent};
