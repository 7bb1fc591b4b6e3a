//! Error types and axum `IntoResponse` implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,

  /// A fatal-to-run dispatch failure (snapshot read failed). Recoverable
  /// failures never surface here — they live inside the run report.
  #[error("dispatch failed: {0}")]
  Dispatch(#[from] cadenza_core::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      Error::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
      Error::Dispatch(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
    };
    (status, Json(json!({ "ok": false, "error": message }))).into_response()
  }
}
