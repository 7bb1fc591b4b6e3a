//! Error type for `cadenza-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("decode error: {0}")]
  Decode(String),

  /// Attempted to mark a lesson that is not in the store.
  #[error("lesson not found: {0}")]
  LessonNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
