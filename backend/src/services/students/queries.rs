use common::model::student::{Shift, Student};
use common::model::subject::Subject;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_STUDENT: &str = "SELECT id, enrollment, name, current_year, shift FROM students";

fn from_row(row: &Row) -> rusqlite::Result<Student> {
    let shift: String = row.get(4)?;
    Ok(Student {
        id: row.get(0)?,
        enrollment: row.get(1)?,
        name: row.get(2)?,
        current_year: row.get(3)?,
        shift: Shift::from_code(&shift).unwrap_or_default(),
        subjects: Vec::new(),
    })
}

fn subjects_of(conn: &Connection, student_id: &str) -> rusqlite::Result<Vec<Subject>> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.name, s.year
         FROM subjects s
         JOIN student_subjects ss ON ss.subject_id = s.id
         WHERE ss.student_id = ?1
         ORDER BY s.year, s.name",
    )?;
    let subjects = stmt
        .query_map(params![student_id], |row| {
            Ok(Subject {
                id: row.get(0)?,
                name: row.get(1)?,
                year: row.get(2)?,
            })
        })?
        .collect();
    subjects
}

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Student>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY rowid", SELECT_STUDENT))?;
    let mut students = stmt.query_map([], from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
    for student in &mut students {
        student.subjects = subjects_of(conn, &student.id)?;
    }
    Ok(students)
}

pub fn find(conn: &Connection, id: &str) -> rusqlite::Result<Option<Student>> {
    let student = conn
        .query_row(&format!("{} WHERE id = ?1", SELECT_STUDENT), params![id], from_row)
        .optional()?;
    match student {
        Some(mut student) => {
            student.subjects = subjects_of(conn, &student.id)?;
            Ok(Some(student))
        }
        None => Ok(None),
    }
}

pub fn enrollments(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT enrollment FROM students")?;
    let enrollments = stmt.query_map([], |row| row.get(0))?.collect();
    enrollments
}

/// Inserts the student row and one association per subject.
pub fn insert(conn: &Connection, student: &Student, subject_ids: &[String]) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO students (id, enrollment, name, current_year, shift) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            student.id,
            student.enrollment,
            student.name,
            student.current_year,
            student.shift.code()
        ],
    )?;
    for subject_id in subject_ids {
        attach(conn, &student.id, subject_id)?;
    }
    Ok(())
}

pub fn update(conn: &Connection, id: &str, name: &str, current_year: u32, shift: Shift) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE students SET name = ?1, current_year = ?2, shift = ?3 WHERE id = ?4",
        params![name, current_year, shift.code(), id],
    )?;
    Ok(changed > 0)
}

pub fn delete(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    Ok(conn.execute("DELETE FROM students WHERE id = ?1", params![id])? > 0)
}

pub fn is_attached(conn: &Connection, student_id: &str, subject_id: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM student_subjects WHERE student_id = ?1 AND subject_id = ?2)",
        params![student_id, subject_id],
        |row| row.get(0),
    )
}

pub fn attach(conn: &Connection, student_id: &str, subject_id: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO student_subjects (student_id, subject_id) VALUES (?1, ?2)",
        params![student_id, subject_id],
    )?;
    Ok(())
}

pub fn detach(conn: &Connection, student_id: &str, subject_id: &str) -> rusqlite::Result<bool> {
    let removed = conn.execute(
        "DELETE FROM student_subjects WHERE student_id = ?1 AND subject_id = ?2",
        params![student_id, subject_id],
    )?;
    Ok(removed > 0)
}
