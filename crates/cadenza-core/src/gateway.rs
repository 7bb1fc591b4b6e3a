//! The `MessageGateway` trait — the outbound messaging collaborator.
//!
//! Transport concerns (provider, authentication, payload shape) live in
//! the implementing crate; the dispatcher sees only success or an opaque
//! error per send.

use std::future::Future;

/// Sends a single text message to a single recipient address.
pub trait MessageGateway: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Deliver `text` to `address`. Any failure cause (auth, malformed
  /// address, transport) is reported uniformly through `Err`.
  fn send<'a>(
    &'a self,
    address: &'a str,
    text: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
