//! Tests against database files on disk.

use dynsql_sqlite::{Database, Error, ErrorKind, Fields, SqlValue};
use tempfile::TempDir;

const SCHEMA_SQL: &str = r"
    CREATE TABLE tasks (
        id INTEGER PRIMARY KEY,
        status TEXT NOT NULL
    );
    INSERT INTO tasks (id, status) VALUES (1, 'new'), (2, 'new'), (3, 'new');
";

async fn seeded(dir: &TempDir) -> Database {
    let mut db = Database::open(dir.path().join("database.db"))
        .await
        .expect("Failed to open database file");
    db.execute_script(SCHEMA_SQL).await.unwrap();
    db
}

async fn reopen(dir: &TempDir) -> Database {
    Database::open(dir.path().join("database.db")).await.unwrap()
}

fn statuses(rows: &[dynsql_sqlite::Row]) -> Vec<(i64, String)> {
    rows.iter()
        .map(|row| {
            let id = row.get("id").and_then(SqlValue::as_int).unwrap();
            let status = row.get("status").and_then(SqlValue::as_text).unwrap();
            (id, status.to_string())
        })
        .collect()
}

#[tokio::test]
async fn update_is_committed_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = seeded(&dir).await;

    let fields = Fields::new().with("status", "started").unwrap();
    db.update("tasks", 2_i64, &fields).await.unwrap();
    db.close().await.unwrap();

    let mut db = reopen(&dir).await;
    let rows = db.select_all("tasks").await.unwrap();
    assert_eq!(
        statuses(&rows),
        [
            (1, String::from("new")),
            (2, String::from("started")),
            (3, String::from("new")),
        ]
    );
}

#[tokio::test]
async fn failed_update_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = seeded(&dir).await;

    let fields = Fields::new()
        .with("status", "started")
        .unwrap()
        .with("nonexistent", 1_i64)
        .unwrap();
    let err = db.update("tasks", 2_i64, &fields).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Statement);
    db.close().await.unwrap();

    let mut db = reopen(&dir).await;
    let conditions = Fields::new().with("status", "new").unwrap();
    assert_eq!(db.select_where("tasks", &conditions).await.unwrap().len(), 3);
}

#[tokio::test]
async fn delete_where_then_delete_all() {
    let dir = tempfile::tempdir().unwrap();
    let mut db = seeded(&dir).await;

    let conditions = Fields::new().with("id", 2_i64).unwrap();
    assert_eq!(db.delete_where("tasks", &conditions).await.unwrap(), 1);
    db.close().await.unwrap();

    let mut db = reopen(&dir).await;
    let rows = db.select_all("tasks").await.unwrap();
    assert_eq!(
        statuses(&rows),
        [(1, String::from("new")), (3, String::from("new"))]
    );

    assert_eq!(db.delete_all("tasks").await.unwrap(), 2);
    db.close().await.unwrap();

    let mut db = reopen(&dir).await;
    assert!(db.select_all("tasks").await.unwrap().is_empty());
}

#[tokio::test]
async fn connect_by_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("by_url.db");
    let url = format!("sqlite:{}", path.display());

    let mut db = Database::connect(&url).await.unwrap();
    db.execute_script("CREATE TABLE t (id INTEGER PRIMARY KEY)")
        .await
        .unwrap();
    db.close().await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn unreachable_file_is_a_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("database.db");

    let err = Database::open(&path).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connection);
    assert!(err.to_string().starts_with("cannot open database"));
    assert!(matches!(
        &err,
        Error::Connection { location, .. } if location.ends_with("database.db")
    ));
}
