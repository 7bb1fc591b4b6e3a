//! Integration tests for `SqliteStore` against an in-memory database.

use cadenza_core::{
  lesson::{LessonStatus, NewLesson},
  store::LessonStore,
  student::NewStudent,
};
use uuid::Uuid;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_student(name: &str, phone: Option<&str>) -> NewStudent {
  NewStudent { name: name.to_string(), phone: phone.map(str::to_string) }
}

fn new_lesson(time: &str, student_ids: Vec<Uuid>) -> NewLesson {
  NewLesson {
    scheduled_date: "2025-03-14".to_string(),
    start_time:     time.to_string(),
    status:         LessonStatus::Upcoming,
    student_ids,
    subject:        Some("Violin".to_string()),
  }
}

// ─── Students ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_students() {
  let s = store().await;

  s.add_student(new_student("Alma", Some("+111"))).await.unwrap();
  s.add_student(new_student("Bela", None)).await.unwrap();

  let students = s.list_students().await.unwrap();
  assert_eq!(students.len(), 2);
  assert_eq!(students[0].name, "Alma");
  assert_eq!(students[0].phone.as_deref(), Some("+111"));
  assert_eq!(students[1].name, "Bela");
  assert!(students[1].phone.is_none());
}

// ─── Lessons ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_lessons_round_trips_fields() {
  let s = store().await;
  let alma = s.add_student(new_student("Alma", Some("+111"))).await.unwrap();

  let created =
    s.add_lesson(new_lesson("14:30", vec![alma.student_id])).await.unwrap();
  assert!(!created.reminder_sent);

  let lessons = s.list_lessons().await.unwrap();
  assert_eq!(lessons.len(), 1);
  let lesson = &lessons[0];
  assert_eq!(lesson.lesson_id, created.lesson_id);
  assert_eq!(lesson.scheduled_date, "2025-03-14");
  assert_eq!(lesson.start_time, "14:30");
  assert_eq!(lesson.status, LessonStatus::Upcoming);
  assert_eq!(lesson.subject.as_deref(), Some("Violin"));
  assert_eq!(lesson.student_ids, vec![alma.student_id]);
  assert!(!lesson.reminder_sent);
}

#[tokio::test]
async fn list_lessons_preserves_insertion_order() {
  let s = store().await;

  let first = s.add_lesson(new_lesson("09:00", vec![])).await.unwrap();
  let second = s.add_lesson(new_lesson("10:00", vec![])).await.unwrap();
  let third = s.add_lesson(new_lesson("11:00", vec![])).await.unwrap();

  let ids: Vec<_> =
    s.list_lessons().await.unwrap().iter().map(|l| l.lesson_id).collect();
  assert_eq!(ids, vec![first.lesson_id, second.lesson_id, third.lesson_id]);
}

#[tokio::test]
async fn enrollment_order_is_preserved() {
  let s = store().await;
  let a = s.add_student(new_student("A", None)).await.unwrap();
  let b = s.add_student(new_student("B", None)).await.unwrap();
  let c = s.add_student(new_student("C", None)).await.unwrap();

  s.add_lesson(new_lesson(
    "14:30",
    vec![b.student_id, c.student_id, a.student_id],
  ))
  .await
  .unwrap();

  let lessons = s.list_lessons().await.unwrap();
  assert_eq!(
    lessons[0].student_ids,
    vec![b.student_id, c.student_id, a.student_id]
  );
}

// ─── Reminder marker ─────────────────────────────────────────────────────────

#[tokio::test]
async fn mark_reminder_sent_flips_only_that_lesson() {
  let s = store().await;
  let one = s.add_lesson(new_lesson("14:30", vec![])).await.unwrap();
  let two = s.add_lesson(new_lesson("15:30", vec![])).await.unwrap();

  s.mark_reminder_sent(one.lesson_id).await.unwrap();

  let lessons = s.list_lessons().await.unwrap();
  let by_id = |id: Uuid| lessons.iter().find(|l| l.lesson_id == id).unwrap();
  assert!(by_id(one.lesson_id).reminder_sent);
  assert!(!by_id(two.lesson_id).reminder_sent);
}

#[tokio::test]
async fn mark_reminder_sent_is_idempotent_on_the_row() {
  let s = store().await;
  let lesson = s.add_lesson(new_lesson("14:30", vec![])).await.unwrap();

  s.mark_reminder_sent(lesson.lesson_id).await.unwrap();
  s.mark_reminder_sent(lesson.lesson_id).await.unwrap();

  assert!(s.list_lessons().await.unwrap()[0].reminder_sent);
}

#[tokio::test]
async fn mark_reminder_sent_unknown_lesson_errors() {
  let s = store().await;
  let err = s.mark_reminder_sent(Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(err, Error::LessonNotFound(_)));
}

// ─── Malformed rows ──────────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_schedule_text_still_lists() {
  // The store passes schedule text through unparsed; the selector is the
  // layer that excludes rows like this.
  let s = store().await;
  let mut input = new_lesson("whenever", vec![]);
  input.scheduled_date = "not-a-date".to_string();
  s.add_lesson(input).await.unwrap();

  let lessons = s.list_lessons().await.unwrap();
  assert_eq!(lessons.len(), 1);
  assert!(lessons[0].start_at().is_none());
}
