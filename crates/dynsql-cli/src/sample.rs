//! Sample project/task schema used by `init` and `demo`.

/// Creates the sample tables if they are missing.
pub const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    start_date TEXT,
    end_date TEXT
);

CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    project_id INTEGER NOT NULL,
    name VARCHAR(250) NOT NULL,
    description TEXT,
    status VARCHAR(15) NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    FOREIGN KEY (project_id) REFERENCES projects (id)
);
";

/// Seed rows. Re-running keeps existing rows with the same ids.
pub const SEED_SQL: &str = r"
INSERT OR IGNORE INTO projects (id, name, start_date, end_date) VALUES
    (1, 'Project 1', '2024-01-01', '2024-06-30'),
    (2, 'Project 2', '2024-02-01', '2024-08-31'),
    (3, 'Project 3', '2024-03-01', '2024-12-31');

INSERT OR IGNORE INTO tasks (id, project_id, name, description, status, start_date, end_date) VALUES
    (1, 1, 'Task 1', 'Description 1', 'in progress', '2024-01-01', '2024-02-01'),
    (2, 1, 'Task 2', 'Description 2', 'new', '2024-02-01', '2024-03-01'),
    (3, 2, 'Task 3', 'Description 3', 'in progress', '2024-02-01', '2024-04-01'),
    (4, 2, 'Task 4', 'Description 4', 'waiting', '2024-03-01', '2024-05-01'),
    (5, 3, 'Task 5', 'Description 5', 'in progress', '2024-03-01', '2024-06-01');
";
