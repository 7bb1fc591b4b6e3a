//! Reminder window selection.
//!
//! Pure eligibility logic over a lesson snapshot: no I/O, fully
//! determined by the snapshot and the reference instant.

use chrono::{Duration, NaiveDateTime};

use crate::lesson::{Lesson, LessonStatus};

/// How far ahead of `now` a lesson may start and still get a reminder.
pub fn lookahead() -> Duration { Duration::hours(1) }

/// Whether `lesson` qualifies for a reminder at `now`.
///
/// A lesson starting exactly at `now` is already due and excluded; one
/// starting exactly at `now + 1h` is included. A lesson whose stored
/// date/time does not parse is excluded with a WARN — a data-quality
/// problem, never a failure of the run.
pub fn is_eligible(lesson: &Lesson, now: NaiveDateTime) -> bool {
  if lesson.status != LessonStatus::Upcoming || lesson.reminder_sent {
    return false;
  }
  match lesson.start_at() {
    Some(start) => start > now && start <= now + lookahead(),
    None => {
      tracing::warn!(
        lesson_id = %lesson.lesson_id,
        date = %lesson.scheduled_date,
        time = %lesson.start_time,
        "excluding lesson with unparsable schedule"
      );
      false
    }
  }
}

/// The subset of `lessons` eligible at `now`, in snapshot order.
pub fn eligible<'a>(
  lessons: &'a [Lesson],
  now: NaiveDateTime,
) -> Vec<&'a Lesson> {
  lessons.iter().filter(|l| is_eligible(l, now)).collect()
}
