//! [`HttpGateway`] — the reqwest implementation of [`MessageGateway`].

use cadenza_core::gateway::MessageGateway;
use serde::Serialize;

use crate::{Error, Result};

/// Connection settings for the messaging provider, passed in explicitly
/// at construction time — never read from the environment mid-send.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
  /// Full URL of the provider's send endpoint.
  pub send_url: String,
  /// Bearer token for the provider API.
  pub token:    String,
}

#[derive(Serialize)]
struct SendBody<'a> {
  to:      &'a str,
  message: &'a str,
}

/// A message gateway speaking JSON over HTTP.
///
/// Cloning is cheap — the inner `reqwest::Client` is reference-counted.
#[derive(Clone)]
pub struct HttpGateway {
  http:   reqwest::Client,
  config: GatewayConfig,
}

impl HttpGateway {
  pub fn new(config: GatewayConfig) -> Self {
    Self { http: reqwest::Client::new(), config }
  }

  /// Build against an existing client, e.g. one with custom timeouts.
  pub fn with_client(http: reqwest::Client, config: GatewayConfig) -> Self {
    Self { http, config }
  }
}

impl MessageGateway for HttpGateway {
  type Error = Error;

  async fn send(&self, address: &str, text: &str) -> Result<()> {
    let response = self
      .http
      .post(&self.config.send_url)
      .bearer_auth(&self.config.token)
      .json(&SendBody { to: address, message: text })
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(Error::Rejected { status: status.as_u16(), body });
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};

  use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
  };

  use super::*;

  #[derive(Clone, Default)]
  struct Seen {
    requests: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>,
  }

  /// Bind a loopback stub provider; `status` is what it answers with.
  async fn stub_provider(status: StatusCode) -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
      .route(
        "/messages",
        post(
          move |State(seen): State<Seen>,
                headers: HeaderMap,
                Json(body): Json<serde_json::Value>| async move {
            let auth = headers
              .get("authorization")
              .and_then(|v| v.to_str().ok())
              .map(str::to_string);
            seen.requests.lock().unwrap().push((auth, body));
            (status, "nope")
          },
        ),
      )
      .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    (format!("http://{addr}/messages"), seen)
  }

  fn gateway(send_url: String) -> HttpGateway {
    HttpGateway::new(GatewayConfig { send_url, token: "tok-123".to_string() })
  }

  #[tokio::test]
  async fn posts_expected_payload_with_bearer_token() {
    let (url, seen) = stub_provider(StatusCode::OK).await;

    gateway(url).send("+3670111", "see you at 14:30").await.unwrap();

    let requests = seen.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (auth, body) = &requests[0];
    assert_eq!(auth.as_deref(), Some("Bearer tok-123"));
    assert_eq!(body["to"], "+3670111");
    assert_eq!(body["message"], "see you at 14:30");
  }

  #[tokio::test]
  async fn non_success_status_maps_to_rejected() {
    let (url, _) = stub_provider(StatusCode::UNPROCESSABLE_ENTITY).await;

    let err = gateway(url).send("+1", "hi").await.unwrap_err();
    match err {
      Error::Rejected { status, body } => {
        assert_eq!(status, 422);
        assert_eq!(body, "nope");
      }
      other => panic!("expected Rejected, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn unreachable_provider_maps_to_transport() {
    // Nothing listens on this port.
    let err = gateway("http://127.0.0.1:1/messages".to_string())
      .send("+1", "hi")
      .await
      .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
  }
}
