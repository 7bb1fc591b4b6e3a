//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings; lesson status as a
//! snake_case discriminant. Scheduled date and start time pass through
//! unparsed — the core excludes malformed rows at selection time.

use cadenza_core::{
  lesson::{Lesson, LessonStatus},
  student::Student,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── LessonStatus ────────────────────────────────────────────────────────────

pub fn encode_status(s: LessonStatus) -> &'static str {
  match s {
    LessonStatus::Upcoming => "upcoming",
    LessonStatus::Completed => "completed",
    LessonStatus::CancelledByStudent => "cancelled_by_student",
    LessonStatus::CancelledByTeacher => "cancelled_by_teacher",
    LessonStatus::Rescheduled => "rescheduled",
    LessonStatus::NoShow => "no_show",
  }
}

pub fn decode_status(s: &str) -> Result<LessonStatus> {
  match s {
    "upcoming" => Ok(LessonStatus::Upcoming),
    "completed" => Ok(LessonStatus::Completed),
    "cancelled_by_student" => Ok(LessonStatus::CancelledByStudent),
    "cancelled_by_teacher" => Ok(LessonStatus::CancelledByTeacher),
    "rescheduled" => Ok(LessonStatus::Rescheduled),
    "no_show" => Ok(LessonStatus::NoShow),
    other => Err(Error::Decode(format!("unknown lesson status: {other:?}"))),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `lessons` row plus its enrollment.
pub struct RawLesson {
  pub lesson_id:      String,
  pub scheduled_date: String,
  pub start_time:     String,
  pub status:         String,
  pub reminder_sent:  bool,
  pub subject:        Option<String>,
  pub student_ids:    Vec<String>,
}

impl RawLesson {
  pub fn into_lesson(self) -> Result<Lesson> {
    let student_ids = self
      .student_ids
      .iter()
      .map(|s| decode_uuid(s))
      .collect::<Result<Vec<_>>>()?;

    Ok(Lesson {
      lesson_id:      decode_uuid(&self.lesson_id)?,
      scheduled_date: self.scheduled_date,
      start_time:     self.start_time,
      status:         decode_status(&self.status)?,
      student_ids,
      reminder_sent:  self.reminder_sent,
      subject:        self.subject,
    })
  }
}

/// Raw strings read directly from a `students` row.
pub struct RawStudent {
  pub student_id: String,
  pub name:       String,
  pub phone:      Option<String>,
}

impl RawStudent {
  pub fn into_student(self) -> Result<Student> {
    Ok(Student {
      student_id: decode_uuid(&self.student_id)?,
      name:       self.name,
      phone:      self.phone,
    })
  }
}
