//! Handler for the external scheduler's trigger endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/jobs/reminders` | `Authorization: Bearer <trigger_secret>` |

use axum::{Json, extract::State, http::HeaderMap};
use cadenza_core::{
  dispatch::{ReminderDispatcher, SendOutcome},
  gateway::MessageGateway,
  store::LessonStore,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::{AppState, auth, error::Error};

/// Wire shape of a completed run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunSummary {
  pub ok:               bool,
  pub eligible_lessons: usize,
  pub outcomes:         Vec<SendOutcome>,
}

/// `POST /jobs/reminders` — execute one reminder run now.
///
/// The reference instant is the studio-local wall clock at the moment
/// the trigger fires.
pub async fn run_reminders<S, G>(
  State(state): State<AppState<S, G>>,
  headers: HeaderMap,
) -> Result<Json<RunSummary>, Error>
where
  S: LessonStore + Clone + Send + Sync + 'static,
  G: MessageGateway + Clone + Send + Sync + 'static,
{
  auth::verify_secret(&headers, &state.config.trigger_secret)?;

  let now = Local::now().naive_local();
  let dispatcher =
    ReminderDispatcher::new(state.store.clone(), state.gateway.clone());
  let report = dispatcher.run(now).await?;

  Ok(Json(RunSummary {
    ok:               true,
    eligible_lessons: report.eligible_lessons,
    outcomes:         report.outcomes,
  }))
}
