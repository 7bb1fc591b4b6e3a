//! Error type for `cadenza-gateway-http`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// The provider answered with a non-success status; the body is kept
  /// verbatim as the opaque failure payload.
  #[error("provider rejected send ({status}): {body}")]
  Rejected { status: u16, body: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
