//! dynsql CLI
//!
//! Command-line tool for inserting, listing, updating and deleting rows in
//! an embedded SQLite database.

mod args;
mod sample;

use std::process::ExitCode;

use clap::Parser;
use dynsql_sqlite::{Database, Fields, Result, Row};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::args::{to_fields, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut db = Database::connect(&cli.database).await?;
    let code = exit_code(run(&mut db, cli.command).await);
    db.close().await?;
    Ok(code)
}

/// Logs a failed command and maps it to the process exit code.
fn exit_code(outcome: Result<ExitCode>) -> ExitCode {
    outcome.unwrap_or_else(|err| {
        error!(kind = ?err.kind(), "{err}");
        ExitCode::FAILURE
    })
}

async fn run(db: &mut Database, command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Init => {
            db.execute_script(sample::SCHEMA_SQL).await?;
            db.execute_script(sample::SEED_SQL).await?;
            info!("Sample tables created and seeded");
        }

        Commands::List { table, conditions } => {
            let conditions = to_fields(conditions)?;
            warn_null_conditions(&conditions);
            let rows = db.select_where(&table, &conditions).await?;
            print_rows(&table, &rows);
        }

        Commands::Count { table, conditions } => {
            let conditions = to_fields(conditions)?;
            warn_null_conditions(&conditions);
            let count = db.count_where(&table, &conditions).await?;
            println!("{count}");
        }

        Commands::Insert { table, fields } => {
            let id = db.insert(&table, &to_fields(fields)?).await?;
            info!(table = %table, id, "Inserted row");
        }

        Commands::Update { table, id, fields } => {
            let changed = db.update(&table, id, &to_fields(fields)?).await?;
            if changed == 0 {
                warn!(table = %table, id, "No row with this id");
            } else {
                info!(table = %table, id, "Row updated");
            }
        }

        Commands::Delete { table, conditions } => {
            let conditions = to_fields(conditions)?;
            warn_null_conditions(&conditions);
            let removed = db.delete_where(&table, &conditions).await?;
            info!(table = %table, removed, "Rows deleted");
        }

        Commands::DeleteAll { table, yes } => {
            if !yes {
                warn!(table = %table, "Refusing to delete every row without --yes");
                return Ok(ExitCode::FAILURE);
            }
            let removed = db.delete_all(&table).await?;
            info!(table = %table, removed, "All rows deleted");
        }

        Commands::Demo => demo(db).await?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Seeds the sample tables, updates task 2, shows how a bad column is
/// reported, then deletes task 2.
async fn demo(db: &mut Database) -> Result<()> {
    db.execute_script(sample::SCHEMA_SQL).await?;
    db.execute_script(sample::SEED_SQL).await?;
    print_rows("tasks", &db.select_all("tasks").await?);

    let started = Fields::new().with("status", "started")?;
    db.update("tasks", 2_i64, &started).await?;
    info!("Task 2 marked as started");

    let typo = Fields::new().with("stat", "started")?;
    match db.update("tasks", 2_i64, &typo).await {
        Ok(_) => warn!("Update of a missing column succeeded"),
        Err(err) => warn!(kind = ?err.kind(), "Update failed: {err}"),
    }

    let task_two = Fields::new().with("id", 2_i64)?;
    print_rows("tasks", &db.select_where("tasks", &task_two).await?);

    db.delete_where("tasks", &task_two).await?;
    info!("Task 2 deleted");
    print_rows("tasks", &db.select_all("tasks").await?);

    Ok(())
}

/// Conditions compare with `=`, which is never true for NULL.
fn warn_null_conditions(conditions: &Fields) {
    for column in null_columns(conditions) {
        warn!(column, "Condition on NULL matches no rows");
    }
}

fn null_columns(conditions: &Fields) -> Vec<&str> {
    conditions
        .iter()
        .filter(|(_, value)| value.is_null())
        .map(|(column, _)| column.as_str())
        .collect()
}

fn print_rows(table: &str, rows: &[Row]) {
    println!("\n{table}:");
    println!("{:-<60}", "");
    if let Some(first) = rows.first() {
        println!("{}", first.columns().join(" | "));
        println!("{:-<60}", "");
    }
    for row in rows {
        println!("{row}");
    }
    println!("({} rows)\n", rows.len());
}
