use common::model::subject::Subject;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn from_row(row: &Row) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
        year: row.get(2)?,
    })
}

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Subject>> {
    let mut stmt = conn.prepare("SELECT id, name, year FROM subjects ORDER BY year, name")?;
    let subjects = stmt.query_map([], from_row)?.collect();
    subjects
}

pub fn find(conn: &Connection, id: &str) -> rusqlite::Result<Option<Subject>> {
    conn.query_row(
        "SELECT id, name, year FROM subjects WHERE id = ?1",
        params![id],
        from_row,
    )
    .optional()
}

pub fn insert(conn: &Connection, subject: &Subject) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO subjects (id, name, year) VALUES (?1, ?2, ?3)",
        params![subject.id, subject.name, subject.year],
    )?;
    Ok(())
}

/// Returns whether a row was updated.
pub fn update(conn: &Connection, subject: &Subject) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE subjects SET name = ?1, year = ?2 WHERE id = ?3",
        params![subject.name, subject.year, subject.id],
    )?;
    Ok(changed > 0)
}

/// Returns whether a row was deleted.
pub fn delete(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    Ok(conn.execute("DELETE FROM subjects WHERE id = ?1", params![id])? > 0)
}
