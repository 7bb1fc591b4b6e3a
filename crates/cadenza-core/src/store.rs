//! The `LessonStore` trait — the repository collaborator contract.
//!
//! The trait is implemented by storage backends (e.g.
//! `cadenza-store-sqlite`). The dispatcher and the server depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{lesson::Lesson, student::Student};

/// Read access to the lesson and student snapshots, plus the single
/// narrow mutation the dispatcher performs.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait LessonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// List every lesson, in stable insertion order.
  fn list_lessons(
    &self,
  ) -> impl Future<Output = Result<Vec<Lesson>, Self::Error>> + Send + '_;

  /// List every student.
  fn list_students(
    &self,
  ) -> impl Future<Output = Result<Vec<Student>, Self::Error>> + Send + '_;

  /// Set the lesson's `reminder_sent` flag to true.
  ///
  /// Touches nothing but that one flag on that one row. Called at most
  /// once per eligible lesson per run, and only after at least one send
  /// for that lesson has succeeded.
  fn mark_reminder_sent(
    &self,
    lesson_id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
