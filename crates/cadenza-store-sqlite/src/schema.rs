//! SQL schema for the Cadenza SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS students (
    student_id  TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    phone       TEXT             -- NULL means unreachable for reminders
);

CREATE TABLE IF NOT EXISTS lessons (
    lesson_id      TEXT PRIMARY KEY,
    scheduled_date TEXT NOT NULL,   -- 'YYYY-MM-DD', studio-local
    start_time     TEXT NOT NULL,   -- 'HH:MM', studio-local wall clock
    status         TEXT NOT NULL,   -- LessonStatus discriminant
    reminder_sent  INTEGER NOT NULL DEFAULT 0,
    subject        TEXT
);

-- Enrollment, ordered by position within the lesson.
CREATE TABLE IF NOT EXISTS lesson_students (
    lesson_id  TEXT NOT NULL REFERENCES lessons(lesson_id),
    student_id TEXT NOT NULL REFERENCES students(student_id),
    position   INTEGER NOT NULL,
    PRIMARY KEY (lesson_id, student_id)
);

CREATE INDEX IF NOT EXISTS lessons_status_idx   ON lessons(status);
CREATE INDEX IF NOT EXISTS lessons_date_idx     ON lessons(scheduled_date);

PRAGMA user_version = 1;
";
