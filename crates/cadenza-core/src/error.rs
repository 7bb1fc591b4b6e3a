//! Error types for `cadenza-core`.

use thiserror::Error;

/// Boxed collaborator error, erased so the dispatcher stays generic over
/// store and gateway backends.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Fatal-to-run errors. Everything recoverable (a failed send, a failed
/// marker update, a data-quality exclusion) lives in the dispatch report
/// or in the logs, never here.
#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to load lesson snapshot: {0}")]
  LessonSnapshot(#[source] BoxError),

  #[error("failed to load student snapshot: {0}")]
  StudentSnapshot(#[source] BoxError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
