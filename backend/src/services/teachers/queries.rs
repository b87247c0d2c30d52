use common::model::teacher::Teacher;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn from_row(row: &Row) -> rusqlite::Result<Teacher> {
    Ok(Teacher {
        id: row.get(0)?,
        registry: row.get(1)?,
        name: row.get(2)?,
        department: row.get(3)?,
    })
}

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Teacher>> {
    let mut stmt = conn.prepare("SELECT id, registry, name, department FROM teachers ORDER BY rowid")?;
    let teachers = stmt.query_map([], from_row)?.collect();
    teachers
}

pub fn find(conn: &Connection, id: &str) -> rusqlite::Result<Option<Teacher>> {
    conn.query_row(
        "SELECT id, registry, name, department FROM teachers WHERE id = ?1",
        params![id],
        from_row,
    )
    .optional()
}

/// Registries already issued under `code`.
pub fn registries(conn: &Connection, code: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT registry FROM teachers WHERE registry LIKE ?1 || '-%'")?;
    let registries = stmt.query_map(params![code], |row| row.get(0))?.collect();
    registries
}

pub fn insert(conn: &Connection, teacher: &Teacher) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO teachers (id, registry, name, department) VALUES (?1, ?2, ?3, ?4)",
        params![teacher.id, teacher.registry, teacher.name, teacher.department],
    )?;
    Ok(())
}

pub fn update(conn: &Connection, id: &str, name: &str, department: &str) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE teachers SET name = ?1, department = ?2 WHERE id = ?3",
        params![name, department, id],
    )?;
    Ok(changed > 0)
}

pub fn delete(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    Ok(conn.execute("DELETE FROM teachers WHERE id = ?1", params![id])? > 0)
}
