//! HTTP surface of the Cadenza reminder dispatcher.
//!
//! Exposes an axum [`Router`] with the scheduler-facing trigger endpoint,
//! backed by any [`LessonStore`] and [`MessageGateway`]. The external
//! timer (cron, hosted scheduler) POSTs here at a fixed cadence; each
//! call is one full scan-and-notify run.

pub mod auth;
pub mod error;
pub mod jobs;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, http::StatusCode, routing::{get, post}};
use cadenza_core::{gateway::MessageGateway, store::LessonStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  pub store_path:       PathBuf,
  /// Shared secret the external scheduler presents on trigger calls.
  pub trigger_secret:   String,
  pub gateway_send_url: String,
  pub gateway_token:    String,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: LessonStore, G: MessageGateway> {
  pub store:   Arc<S>,
  pub gateway: Arc<G>,
  pub config:  Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the dispatcher service.
pub fn router<S, G>(state: AppState<S, G>) -> Router
where
  S: LessonStore + Clone + Send + Sync + 'static,
  G: MessageGateway + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/healthz", get(healthz))
    .route("/jobs/reminders", post(jobs::run_reminders::<S, G>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Unauthenticated liveness probe.
async fn healthz() -> StatusCode { StatusCode::NO_CONTENT }

// ─── Integration tests ────────────────────────────────────────────────────────
