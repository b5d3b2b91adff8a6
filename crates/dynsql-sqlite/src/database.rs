//! A single SQLite connection and the operations run through it.
//!
//! Every mutating call runs in its own transaction: BEGIN, execute, COMMIT.
//! When the statement fails the transaction is rolled back and the error is
//! returned, so a failed call never commits anything.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use dynsql_core::builder::{self, Fields, SqlValue, Statement, ToSqlValue};
use dynsql_core::IntoIdent;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::row::Row;

/// What a committed statement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Rows changed by the statement.
    pub rows_affected: u64,
    /// Row id of the most recent successful INSERT on this connection.
    pub last_insert_id: i64,
}

/// An open database, owned by one caller at a time.
///
/// All methods take `&mut self` and finish their round trip before
/// returning, so statements on one `Database` never overlap.
pub struct Database {
    conn: SqliteConnection,
    location: String,
}

impl Database {
    /// Opens (or creates) the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] when the file cannot be opened or
    /// created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect_with(options, path.display().to_string()).await
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if SQLite cannot allocate it.
    pub async fn open_in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    /// Opens a database from a `sqlite:` URL, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] for a malformed URL or an unreachable
    /// file.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|source| Error::Connection {
                location: url.to_string(),
                source,
            })?
            .create_if_missing(true);
        Self::connect_with(options, url.to_string()).await
    }

    async fn connect_with(options: SqliteConnectOptions, location: String) -> Result<Self> {
        let conn = options
            .connect()
            .await
            .map_err(|source| Error::Connection {
                location: location.clone(),
                source,
            })?;
        info!(db = %location, "Opened database");
        Ok(Self { conn, location })
    }

    /// Path or URL this database was opened from.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Executes `statement` and commits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Statement`] if the engine rejects the statement;
    /// the transaction is rolled back.
    pub async fn execute(&mut self, statement: &Statement) -> Result<ExecOutcome> {
        let sql = statement.sql();
        debug!(sql = %sql, params = statement.params().len(), "Executing statement");

        let mut tx = self
            .conn
            .begin()
            .await
            .map_err(|source| Error::statement(sql, source))?;

        let result = bind_params(sqlx::query(sql), statement.params())
            .execute(&mut *tx)
            .await;

        let done = match result {
            Ok(done) => done,
            Err(source) => {
                debug!(sql = %sql, error = %source, "Statement failed, rolling back");
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                return Err(Error::statement(sql, source));
            }
        };

        tx.commit()
            .await
            .map_err(|source| Error::statement(sql, source))?;

        let outcome = ExecOutcome {
            rows_affected: done.rows_affected(),
            last_insert_id: done.last_insert_rowid(),
        };
        info!(
            sql = %sql,
            rows_affected = outcome.rows_affected,
            "Committed"
        );
        Ok(outcome)
    }

    /// Runs a read statement and returns every row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Statement`] if the query fails or a value cannot be
    /// decoded.
    pub async fn fetch_all(&mut self, statement: &Statement) -> Result<Vec<Row>> {
        let sql = statement.sql();
        debug!(sql = %sql, params = statement.params().len(), "Fetching rows");

        let rows = bind_params(sqlx::query(sql), statement.params())
            .fetch_all(&mut self.conn)
            .await
            .map_err(|source| Error::statement(sql, source))?;

        rows.iter()
            .map(|row| Row::decode(row).map_err(|source| Error::statement(sql, source)))
            .collect()
    }

    /// Runs a read statement and returns its first row, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Statement`] if the query fails or a value cannot be
    /// decoded.
    pub async fn fetch_one(&mut self, statement: &Statement) -> Result<Option<Row>> {
        let sql = statement.sql();
        debug!(sql = %sql, params = statement.params().len(), "Fetching one row");

        let row = bind_params(sqlx::query(sql), statement.params())
            .fetch_optional(&mut self.conn)
            .await
            .map_err(|source| Error::statement(sql, source))?;

        row.as_ref()
            .map(Row::decode)
            .transpose()
            .map_err(|source| Error::statement(sql, source))
    }

    /// Runs a trusted multi-statement script (schema, seed data) in one
    /// transaction.
    ///
    /// The script is sent as is, without parameters. Never pass text built
    /// from user input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Statement`] if any statement fails; nothing from
    /// the script is committed.
    pub async fn execute_script(&mut self, script: &str) -> Result<()> {
        debug!(bytes = script.len(), "Executing script");

        let mut tx = self
            .conn
            .begin()
            .await
            .map_err(|source| Error::statement(script, source))?;

        if let Err(source) = sqlx::raw_sql(script).execute(&mut *tx).await {
            debug!(error = %source, "Script failed, rolling back");
            if let Err(rollback_err) = tx.rollback().await {
                warn!(error = %rollback_err, "Rollback failed");
            }
            return Err(Error::statement(script, source));
        }

        tx.commit()
            .await
            .map_err(|source| Error::statement(script, source))?;
        info!("Script committed");
        Ok(())
    }

    /// Sets the given columns on the row whose `id` is `row_id`, and
    /// commits. Returns the number of rows changed (0 when no row has that
    /// id).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an invalid table name or empty
    ///   `fields`.
    /// - [`Error::Statement`] when the engine rejects the update, e.g. an
    ///   unknown column. Nothing is committed.
    pub async fn update<T, V>(&mut self, table: T, row_id: V, fields: &Fields) -> Result<u64>
    where
        T: IntoIdent,
        V: ToSqlValue,
    {
        let table = table.into_ident()?;
        let statement = builder::update(&table, row_id, fields)?;
        Ok(self.execute(&statement).await?.rows_affected)
    }

    /// Deletes the rows matching every condition, and commits.
    ///
    /// Conditions compare with `=`, so a NULL condition deletes nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an invalid table name or empty
    ///   `conditions`. Use [`Database::delete_all`] to clear a table.
    /// - [`Error::Statement`] when the engine rejects the delete.
    pub async fn delete_where<T: IntoIdent>(
        &mut self,
        table: T,
        conditions: &Fields,
    ) -> Result<u64> {
        let table = table.into_ident()?;
        let statement = builder::delete_where(&table, conditions)?;
        Ok(self.execute(&statement).await?.rows_affected)
    }

    /// Deletes every row of `table`, and commits. There is no confirmation
    /// step.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an invalid table name.
    /// - [`Error::Statement`] when the engine rejects the delete.
    pub async fn delete_all<T: IntoIdent>(&mut self, table: T) -> Result<u64> {
        let table = table.into_ident()?;
        let statement = builder::delete_all(&table);
        Ok(self.execute(&statement).await?.rows_affected)
    }

    /// Inserts one row, commits, and returns its row id.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an invalid table name or empty
    ///   `fields`.
    /// - [`Error::Statement`] on constraint violations or unknown columns.
    pub async fn insert<T: IntoIdent>(&mut self, table: T, fields: &Fields) -> Result<i64> {
        let table = table.into_ident()?;
        let statement = builder::insert(&table, fields)?;
        Ok(self.execute(&statement).await?.last_insert_id)
    }

    /// Returns every row of `table`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an invalid table name.
    /// - [`Error::Statement`] when the table does not exist.
    pub async fn select_all<T: IntoIdent>(&mut self, table: T) -> Result<Vec<Row>> {
        let table = table.into_ident()?;
        self.fetch_all(&builder::select_all(&table)).await
    }

    /// Returns the rows of `table` matching every condition.
    ///
    /// Conditions compare with `=`, so a NULL condition matches no row.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an invalid table name.
    /// - [`Error::Statement`] for an unknown table or column.
    pub async fn select_where<T: IntoIdent>(
        &mut self,
        table: T,
        conditions: &Fields,
    ) -> Result<Vec<Row>> {
        let table = table.into_ident()?;
        self.fetch_all(&builder::select_where(&table, conditions))
            .await
    }

    /// Counts the rows of `table` matching every condition. No conditions
    /// counts the whole table.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an invalid table name.
    /// - [`Error::Statement`] for an unknown table or column.
    pub async fn count_where<T: IntoIdent>(
        &mut self,
        table: T,
        conditions: &Fields,
    ) -> Result<i64> {
        let table = table.into_ident()?;
        let row = self
            .fetch_one(&builder::count_where(&table, conditions))
            .await?;
        Ok(row
            .as_ref()
            .and_then(|row| row.get_index(0))
            .and_then(SqlValue::as_int)
            .unwrap_or(0))
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Closing`] if SQLite reports an error on shutdown.
    pub async fn close(self) -> Result<()> {
        let location = self.location;
        self.conn.close().await.map_err(Error::Closing)?;
        info!(db = %location, "Closed database");
        Ok(())
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Binds parameters in placeholder order.
fn bind_params<'q>(
    mut query: sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>>,
    params: &[SqlValue],
) -> sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = bind_param(query, param.clone());
    }
    query
}

/// Binds a SqlValue parameter to a raw query.
fn bind_param<'q>(
    query: sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> sqlx::query::Query<'q, sqlx::Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}
