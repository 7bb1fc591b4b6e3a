//! Shared-secret verification for the external scheduler's trigger calls.

use axum::http::{HeaderMap, header};
use sha2::{Digest as _, Sha256};

use crate::error::Error;

/// Check the `Authorization: Bearer <secret>` header against the
/// configured trigger secret.
///
/// Both sides are hashed before comparison so equality does not
/// short-circuit on the secret's bytes.
pub fn verify_secret(headers: &HeaderMap, secret: &str) -> Result<(), Error> {
  let provided = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .ok_or(Error::Unauthorized)?;

  if Sha256::digest(provided.as_bytes()) != Sha256::digest(secret.as_bytes()) {
    return Err(Error::Unauthorized);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use axum::http::{HeaderMap, HeaderValue, header};

  use super::*;

  fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers
      .insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
  }

  #[test]
  fn correct_secret_passes() {
    let headers = headers_with("Bearer cron-secret");
    assert!(verify_secret(&headers, "cron-secret").is_ok());
  }

  #[test]
  fn wrong_secret_is_unauthorized() {
    let headers = headers_with("Bearer guess");
    assert!(matches!(
      verify_secret(&headers, "cron-secret"),
      Err(Error::Unauthorized)
    ));
  }

  #[test]
  fn missing_header_is_unauthorized() {
    let headers = HeaderMap::new();
    assert!(matches!(
      verify_secret(&headers, "cron-secret"),
      Err(Error::Unauthorized)
    ));
  }

  #[test]
  fn non_bearer_scheme_is_unauthorized() {
    let headers = headers_with("Basic cron-secret");
    assert!(matches!(
      verify_secret(&headers, "cron-secret"),
      Err(Error::Unauthorized)
    ));
  }
}
