//! Dynamic statement builders.
//!
//! Each builder takes a validated table name and an ordered [`Fields`] list
//! and returns a [`Statement`]. Placeholders and parameters are produced from
//! the same iteration, so their order always matches.
//!
//! # Example
//!
//! ```rust
//! use dynsql_core::builder::{delete_where, Fields};
//! use dynsql_core::Ident;
//!
//! let table = Ident::new("tasks")?;
//! let conditions = Fields::new().with("project_id", 1_i64)?.with("status", "done")?;
//! let stmt = delete_where(&table, &conditions)?;
//!
//! assert_eq!(stmt.sql(), "DELETE FROM tasks WHERE project_id = ? AND status = ?");
//! assert_eq!(stmt.params().len(), 2);
//! # Ok::<(), dynsql_core::BuildError>(())
//! ```

mod delete;
mod fields;
mod insert;
mod select;
mod statement;
mod update;
pub mod value;

pub use delete::{delete_all, delete_where};
pub use fields::Fields;
pub use insert::insert;
pub use select::{count_where, select_all, select_where};
pub use statement::Statement;
pub use update::{update, ID_COLUMN};
pub use value::{SqlValue, ToSqlValue};
