//! HTTP backend for the Cadenza message gateway.
//!
//! Talks to a JSON-over-HTTP messaging provider: one POST per message,
//! bearer-token auth. The dispatcher sees any transport error or non-2xx
//! response as a uniform send failure.

mod client;

pub mod error;

pub use client::{GatewayConfig, HttpGateway};
pub use error::{Error, Result};
