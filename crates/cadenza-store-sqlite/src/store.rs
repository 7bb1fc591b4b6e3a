//! [`SqliteStore`] — the SQLite implementation of [`LessonStore`].

use std::path::Path;

use uuid::Uuid;

use cadenza_core::{
  lesson::{Lesson, NewLesson},
  store::LessonStore,
  student::{NewStudent, Student},
};

use crate::{
  Error, Result,
  encode::{RawLesson, RawStudent, encode_status, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Cadenza lesson store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Writes (portal management surfaces and tests) ─────────────────────

  /// Create and persist a student.
  pub async fn add_student(&self, input: NewStudent) -> Result<Student> {
    let student = Student {
      student_id: Uuid::new_v4(),
      name:       input.name,
      phone:      input.phone,
    };

    let id_str = encode_uuid(student.student_id);
    let name = student.name.clone();
    let phone = student.phone.clone();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO students (student_id, name, phone) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, name, phone],
        )?;
        Ok(())
      })
      .await?;

    Ok(student)
  }

  /// Create and persist a lesson with its enrollment, reminder flag unset.
  pub async fn add_lesson(&self, input: NewLesson) -> Result<Lesson> {
    let lesson = Lesson {
      lesson_id:      Uuid::new_v4(),
      scheduled_date: input.scheduled_date,
      start_time:     input.start_time,
      status:         input.status,
      student_ids:    input.student_ids,
      reminder_sent:  false,
      subject:        input.subject,
    };

    let id_str = encode_uuid(lesson.lesson_id);
    let date = lesson.scheduled_date.clone();
    let time = lesson.start_time.clone();
    let status = encode_status(lesson.status).to_owned();
    let subject = lesson.subject.clone();
    let student_ids: Vec<String> =
      lesson.student_ids.iter().copied().map(encode_uuid).collect();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO lessons (
             lesson_id, scheduled_date, start_time, status,
             reminder_sent, subject
           ) VALUES (?1, ?2, ?3, ?4, 0, ?5)",
          rusqlite::params![id_str, date, time, status, subject],
        )?;
        for (position, student_id) in student_ids.iter().enumerate() {
          tx.execute(
            "INSERT INTO lesson_students (lesson_id, student_id, position)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![id_str, student_id, position as i64],
          )?;
        }
        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(lesson)
  }
}

// ─── LessonStore impl ────────────────────────────────────────────────────────

impl LessonStore for SqliteStore {
  type Error = Error;

  async fn list_lessons(&self) -> Result<Vec<Lesson>> {
    let raws: Vec<RawLesson> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT lesson_id, scheduled_date, start_time, status,
                  reminder_sent, subject
           FROM lessons
           ORDER BY rowid",
        )?;
        let mut enroll_stmt = conn.prepare(
          "SELECT student_id FROM lesson_students
           WHERE lesson_id = ?1
           ORDER BY position",
        )?;

        let mut raws = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
          let lesson_id: String = row.get(0)?;
          let student_ids = enroll_stmt
            .query_map(rusqlite::params![lesson_id], |r| r.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

          raws.push(RawLesson {
            lesson_id,
            scheduled_date: row.get(1)?,
            start_time: row.get(2)?,
            status: row.get(3)?,
            reminder_sent: row.get(4)?,
            subject: row.get(5)?,
            student_ids,
          });
        }
        Ok(raws)
      })
      .await?;

    raws.into_iter().map(RawLesson::into_lesson).collect()
  }

  async fn list_students(&self) -> Result<Vec<Student>> {
    let raws: Vec<RawStudent> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT student_id, name, phone FROM students ORDER BY rowid",
        )?;
        let raws = stmt
          .query_map([], |row| {
            Ok(RawStudent {
              student_id: row.get(0)?,
              name:       row.get(1)?,
              phone:      row.get(2)?,
            })
          })?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(raws)
      })
      .await?;

    raws.into_iter().map(RawStudent::into_student).collect()
  }

  async fn mark_reminder_sent(&self, lesson_id: Uuid) -> Result<()> {
    let id_str = encode_uuid(lesson_id);
    let updated = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "UPDATE lessons SET reminder_sent = 1 WHERE lesson_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(n)
      })
      .await?;

    if updated == 0 {
      return Err(Error::LessonNotFound(lesson_id));
    }
    Ok(())
  }
}
