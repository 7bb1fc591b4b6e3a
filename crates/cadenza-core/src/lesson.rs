//! Lesson — one scheduled teaching slot.
//!
//! The scheduled date and start time are carried in the portal's stored
//! text forms (`YYYY-MM-DD`, `HH:MM`) and parsed on demand, so a row with
//! a malformed schedule is representable and can be excluded from dispatch
//! without failing snapshot decode.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a lesson. Only `Upcoming` lessons are ever
/// considered for a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
  Upcoming,
  Completed,
  CancelledByStudent,
  CancelledByTeacher,
  Rescheduled,
  NoShow,
}

/// A scheduled lesson with its enrolled students.
///
/// `reminder_sent` is the durable idempotency marker: it transitions
/// false→true exactly once per lesson instance and never reverts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
  pub lesson_id:      Uuid,
  /// Calendar date, `YYYY-MM-DD`.
  pub scheduled_date: String,
  /// Studio-local wall-clock start, `HH:MM`.
  pub start_time:     String,
  pub status:         LessonStatus,
  /// Enrolled students, in enrollment order. Never empty for a real row.
  pub student_ids:    Vec<Uuid>,
  pub reminder_sent:  bool,
  /// Subject label for the message text, e.g. "Piano".
  pub subject:        Option<String>,
}

impl Lesson {
  /// Combine date and time into the lesson's start instant.
  ///
  /// Returns `None` when either field fails to parse; callers treat that
  /// as a data-quality exclusion, not an error.
  pub fn start_at(&self) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(&self.scheduled_date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(&self.start_time, "%H:%M").ok()?;
    Some(date.and_time(time))
  }
}

/// Input for creating a lesson; the store assigns the UUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLesson {
  pub scheduled_date: String,
  pub start_time:     String,
  pub status:         LessonStatus,
  pub student_ids:    Vec<Uuid>,
  pub subject:        Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lesson(date: &str, time: &str) -> Lesson {
    Lesson {
      lesson_id:      Uuid::new_v4(),
      scheduled_date: date.to_string(),
      start_time:     time.to_string(),
      status:         LessonStatus::Upcoming,
      student_ids:    vec![],
      reminder_sent:  false,
      subject:        None,
    }
  }

  #[test]
  fn start_at_parses_stored_forms() {
    let at = lesson("2025-03-14", "14:30").start_at().unwrap();
    assert_eq!(at.to_string(), "2025-03-14 14:30:00");
  }

  #[test]
  fn start_at_rejects_malformed_date() {
    assert!(lesson("14/03/2025", "14:30").start_at().is_none());
    assert!(lesson("", "14:30").start_at().is_none());
  }

  #[test]
  fn start_at_rejects_malformed_time() {
    assert!(lesson("2025-03-14", "2pm").start_at().is_none());
    assert!(lesson("2025-03-14", "25:99").start_at().is_none());
  }
}
