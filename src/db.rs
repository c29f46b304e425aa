use std::path::PathBuf;

use rusqlite::{Connection, DatabaseName, Row, params};
use thiserror::Error;

use crate::models::{ClassInstance, NewClassInstance, NewYogaClass, YogaClass};

/// Bumping this drops and recreates the classes table on the next open.
/// The instances table is left untouched across upgrades, so an upgrade is
/// destructive for classes only.
pub const SCHEMA_VERSION: i64 = 2;

const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS YogaClass (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    day TEXT NOT NULL,
    time TEXT NOT NULL,
    capacity INTEGER NOT NULL,
    duration INTEGER NOT NULL,
    price REAL NOT NULL,
    type TEXT NOT NULL,
    description TEXT,
    teacher TEXT
);

CREATE TABLE IF NOT EXISTS ClassInstance (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    teacher TEXT NOT NULL,
    comments TEXT,
    class_id INTEGER,
    FOREIGN KEY(class_id) REFERENCES YogaClass(id)
);
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Local relational store. Holds only the database path: every operation
/// opens its own connection, ensures the schema, executes, and releases the
/// connection on drop, so release happens on error paths too. No connection
/// is shared or reused across calls.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        ensure_schema(&conn)?;
        Ok(conn)
    }

    /// Inserts a class row and returns its autogenerated id. No validation
    /// beyond the schema's NOT NULL constraints.
    pub fn add_yoga_class(&self, new: &NewYogaClass) -> Result<i64, StoreError> {
        let conn = self.open()?;
        conn.execute(
            r#"
INSERT INTO YogaClass (day, time, capacity, duration, price, type, description, teacher)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#,
            params![
                new.day,
                new.time,
                new.capacity,
                new.duration,
                new.price,
                new.class_type,
                new.description,
                new.teacher
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Inserts an instance row. `class_id` is stored as given; no existence
    /// check is performed against the classes table.
    pub fn add_class_instance(&self, new: &NewClassInstance) -> Result<i64, StoreError> {
        let conn = self.open()?;
        conn.execute(
            r#"
INSERT INTO ClassInstance (date, teacher, comments, class_id)
VALUES (?1, ?2, ?3, ?4)
"#,
            params![new.date, new.teacher, new.comments, new.class_id],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All classes, in storage-native order (no ORDER BY).
    pub fn get_all_yoga_classes(&self) -> Result<Vec<YogaClass>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, day, time, capacity, duration, price, type, description, teacher FROM YogaClass",
        )?;
        let classes = stmt
            .query_map([], row_to_class)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(classes)
    }

    /// All instances whose `class_id` equals the argument.
    pub fn get_class_instances(&self, class_id: i64) -> Result<Vec<ClassInstance>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, teacher, comments, class_id FROM ClassInstance WHERE class_id = ?1",
        )?;
        let instances = stmt
            .query_map(params![class_id], row_to_instance)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(instances)
    }

    /// Deletes by primary key; no-op for an unknown id. Dependent instances
    /// are not touched, so they become orphans.
    pub fn delete_yoga_class(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.open()?;
        conn.execute("DELETE FROM YogaClass WHERE id = ?1", params![id])?;
        Ok(())
    }

    pub fn delete_class_instance(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.open()?;
        conn.execute("DELETE FROM ClassInstance WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Empties the classes table only. Instance rows and their now-stale
    /// class references are left intact.
    pub fn reset_database(&self) -> Result<(), StoreError> {
        let conn = self.open()?;
        conn.execute("DELETE FROM YogaClass", [])?;
        Ok(())
    }

    /// Substring match on the teacher field, term trimmed then wildcard
    /// wrapped. SQLite LIKE semantics apply (ASCII case-insensitive); an
    /// empty term matches every row with a non-null teacher.
    pub fn search_classes_by_teacher(&self, term: &str) -> Result<Vec<YogaClass>, StoreError> {
        let conn = self.open()?;
        let pattern = format!("%{}%", term.trim());
        let mut stmt = conn.prepare(
            "SELECT id, day, time, capacity, duration, price, type, description, teacher FROM YogaClass WHERE teacher LIKE ?1",
        )?;
        let classes = stmt
            .query_map(params![pattern], row_to_class)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(classes)
    }

    /// Exact-match on the day field, case-sensitive.
    pub fn search_classes_by_day(&self, day: &str) -> Result<Vec<YogaClass>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT id, day, time, capacity, duration, price, type, description, teacher FROM YogaClass WHERE day = ?1",
        )?;
        let classes = stmt
            .query_map(params![day], row_to_class)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(classes)
    }

    /// Matches classes whose day equals the query. Classes carry no date
    /// column, so a date comparison here could never match and none is made;
    /// only the day field is consulted.
    pub fn search_classes_by_day_or_date(&self, query: &str) -> Result<Vec<YogaClass>, StoreError> {
        self.search_classes_by_day(query)
    }
}

/// Creates the two tables on first use and stamps `user_version`. When an
/// older non-zero version is found, the classes table is dropped and
/// recreated; no data migration is attempted.
fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    let version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if version != 0 && version < SCHEMA_VERSION {
        conn.execute("DROP TABLE IF EXISTS YogaClass", [])?;
    }
    conn.execute_batch(CREATE_TABLES)?;
    if version != SCHEMA_VERSION {
        conn.pragma_update(None::<DatabaseName>, "user_version", SCHEMA_VERSION)?;
    }
    Ok(())
}

fn row_to_class(row: &Row<'_>) -> rusqlite::Result<YogaClass> {
    Ok(YogaClass {
        id: row.get(0)?,
        day: row.get(1)?,
        time: row.get(2)?,
        capacity: row.get(3)?,
        duration: row.get(4)?,
        price: row.get(5)?,
        class_type: row.get(6)?,
        description: row.get(7)?,
        teacher: row.get(8)?,
    })
}

fn row_to_instance(row: &Row<'_>) -> rusqlite::Result<ClassInstance> {
    Ok(ClassInstance {
        id: row.get(0)?,
        date: row.get(1)?,
        teacher: row.get(2)?,
        comments: row.get(3)?,
        class_id: row.get(4)?,
    })
}
