use std::path::Path;
use std::sync::{Arc, Mutex};

use log::info;
use rusqlite::Connection;

use crate::error::ServiceError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS students (
        id TEXT PRIMARY KEY,
        enrollment TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL,
        current_year INTEGER NOT NULL,
        shift TEXT NOT NULL DEFAULT 'M'
    );
    CREATE TABLE IF NOT EXISTS subjects (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        year INTEGER NOT NULL
    );
    CREATE TABLE IF NOT EXISTS teachers (
        id TEXT PRIMARY KEY,
        registry TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL,
        department TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS student_subjects (
        student_id TEXT NOT NULL,
        subject_id TEXT NOT NULL,
        PRIMARY KEY (student_id, subject_id),
        FOREIGN KEY (student_id) REFERENCES students(id) ON DELETE CASCADE,
        FOREIGN KEY (subject_id) REFERENCES subjects(id) ON DELETE CASCADE
    );
";

/// Shared SQLite connection. Handlers lock it for the duration of one
/// operation.
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    pub fn open(path: &Path) -> Result<Self, ServiceError> {
        info!("Abrindo banco de dados em {}", path.display());
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, ServiceError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, ServiceError> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` with exclusive access to the connection.
    pub fn with<T>(&self, f: impl FnOnce(&mut Connection) -> Result<T, ServiceError>) -> Result<T, ServiceError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| ServiceError::Internal("conexão com o banco de dados indisponível".to_string()))?;
        f(&mut conn)
    }
}
