//! Student — the thin recipient record the dispatcher reads.
//!
//! The full portal profile (packages, payments, homework) lives
//! elsewhere; only identity, display name, and the messaging address
//! matter here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student as seen by the reminder dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
  pub student_id: Uuid,
  pub name:       String,
  /// Messaging address; `None` means the student cannot receive reminders.
  pub phone:      Option<String>,
}

/// Input for creating a student; the store assigns the UUID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
  pub name:  String,
  pub phone: Option<String>,
}
