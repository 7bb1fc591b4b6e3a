//! The dispatch orchestrator — one timer-triggered scan-and-notify run.
//!
//! Each run reads one snapshot of lessons and students, selects the
//! lessons starting inside the lookahead window, fans out one message
//! per reachable enrolled student, and durably marks each lesson after
//! its first successful send so the next run skips it.
//!
//! Runs are not locked against each other: if an external trigger fires
//! while a slow run is still in flight, a lesson can be reminded twice
//! before either run persists the marker. That duplicate is accepted
//! for this bounded job rather than paying for cross-run locking.

use std::{collections::HashMap, sync::Arc};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  gateway::MessageGateway,
  lesson::Lesson,
  store::LessonStore,
  student::Student,
  window,
};

// ─── Report types ────────────────────────────────────────────────────────────

/// Terminal state of one send attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SendStatus {
  Sent,
  Failed { reason: String },
}

/// One per-recipient outcome, in attempt order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOutcome {
  pub student: String,
  #[serde(flatten)]
  pub status:  SendStatus,
}

/// The aggregate result of one run. Built fresh per run, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchReport {
  /// Lessons that qualified for a reminder in this run, even if zero.
  pub eligible_lessons: usize,
  pub outcomes:         Vec<SendOutcome>,
}

// ─── Dispatcher ──────────────────────────────────────────────────────────────

/// Orchestrates one reminder run over a [`LessonStore`] and a
/// [`MessageGateway`].
#[derive(Clone)]
pub struct ReminderDispatcher<S, G> {
  store:   Arc<S>,
  gateway: Arc<G>,
}

impl<S, G> ReminderDispatcher<S, G>
where
  S: LessonStore,
  G: MessageGateway,
{
  pub fn new(store: Arc<S>, gateway: Arc<G>) -> Self {
    Self { store, gateway }
  }

  /// Execute one run at reference instant `now`.
  ///
  /// Only a failed snapshot read is fatal. A failed send is recorded in
  /// the report and processing continues; a failed marker update is
  /// logged and the run still succeeds (the next run may then send a
  /// benign duplicate for that lesson).
  pub async fn run(&self, now: NaiveDateTime) -> Result<DispatchReport> {
    let lessons = self
      .store
      .list_lessons()
      .await
      .map_err(|e| Error::LessonSnapshot(Box::new(e)))?;
    let students = self
      .store
      .list_students()
      .await
      .map_err(|e| Error::StudentSnapshot(Box::new(e)))?;

    let by_id: HashMap<_, _> =
      students.iter().map(|s| (s.student_id, s)).collect();

    let eligible = window::eligible(&lessons, now);
    let mut report = DispatchReport {
      eligible_lessons: eligible.len(),
      outcomes:         Vec::new(),
    };
    tracing::info!(eligible = eligible.len(), "reminder run started");

    for lesson in eligible {
      self.dispatch_lesson(lesson, &by_id, &mut report).await;
    }

    tracing::info!(
      eligible = report.eligible_lessons,
      outcomes = report.outcomes.len(),
      "reminder run finished"
    );
    Ok(report)
  }

  /// Fan out to every reachable enrolled student of one lesson.
  ///
  /// The marker update is issued exactly once, on the first successful
  /// send; later recipients of the same lesson are still attempted and
  /// reported — the marker guards cross-run repetition, not within-run
  /// fan-out.
  async fn dispatch_lesson(
    &self,
    lesson: &Lesson,
    students: &HashMap<uuid::Uuid, &Student>,
    report: &mut DispatchReport,
  ) {
    let mut marked = false;

    for student_id in &lesson.student_ids {
      let Some(student) = students.get(student_id) else {
        tracing::warn!(
          lesson_id = %lesson.lesson_id,
          %student_id,
          "enrolled student missing from snapshot, skipping"
        );
        continue;
      };
      let Some(address) = student.phone.as_deref() else {
        tracing::warn!(
          lesson_id = %lesson.lesson_id,
          student = %student.name,
          "student has no messaging address, skipping"
        );
        continue;
      };

      let text = reminder_text(student, lesson);
      match self.gateway.send(address, &text).await {
        Ok(()) => {
          report.outcomes.push(SendOutcome {
            student: student.name.clone(),
            status:  SendStatus::Sent,
          });
          if !marked {
            marked = true;
            if let Err(e) = self.store.mark_reminder_sent(lesson.lesson_id).await
            {
              tracing::warn!(
                lesson_id = %lesson.lesson_id,
                error = %e,
                "failed to persist reminder marker; next run may re-send"
              );
            }
          }
        }
        Err(e) => {
          tracing::warn!(
            lesson_id = %lesson.lesson_id,
            student = %student.name,
            error = %e,
            "reminder send failed"
          );
          report.outcomes.push(SendOutcome {
            student: student.name.clone(),
            status:  SendStatus::Failed { reason: e.to_string() },
          });
        }
      }
    }
  }
}

/// Render the message for one recipient.
///
/// Always contains the student's display name, the subject label (or a
/// plain "lesson" fallback), and the start time as stored.
pub fn reminder_text(student: &Student, lesson: &Lesson) -> String {
  let what = match lesson.subject.as_deref() {
    Some(subject) => format!("{subject} lesson"),
    None => "lesson".to_string(),
  };
  format!(
    "Hi {}! A friendly reminder that your {} starts today at {}.",
    student.name, what, lesson.start_time
  )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
