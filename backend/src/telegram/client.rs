use std::time::Duration;
use serde::{de::DeserializeOwned, Serialize};

use super::types::{ApiResponse, GetUpdates, SendMessage, SetWebhook, Update};

const API_BASE: &str = "https://api.telegram.org";
const CONNECT_TIMEOUT_SECS: u64 = 10;
// on top of the long poll timeout
const REQUEST_SLACK_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
  #[error("http client build failed: {0}")]
  HttpClientBuild(String),
  #[error("request to {method} failed: {reason}")]
  Transport { method: &'static str, reason: String },
  #[error("{method} returned HTTP {status}: {body}")]
  Status { method: &'static str, status: u16, body: String },
  #[error("{method} rejected by api: {description}")]
  Api { method: &'static str, description: String },
  #[error("{method} response could not be parsed: {reason}")]
  Parse { method: &'static str, reason: String },
}

#[derive(Clone)]
pub struct BotApi {
  http: reqwest::Client,
  base_url: String,
}

impl BotApi {
  pub fn new(token: &str, poll_timeout: Duration) -> Result<Self, BotError> {
    let http = reqwest::Client::builder()
      .timeout(poll_timeout + Duration::from_secs(REQUEST_SLACK_SECS))
      .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
      .build()
      .map_err(|e| BotError::HttpClientBuild(e.to_string()))?;
    Ok(Self { http, base_url: format!("{}/bot{}", API_BASE, token) })
  }

  async fn call<B, T>(&self, method: &'static str, body: &B) -> Result<T, BotError>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned
  {
    let response = self.http
      .post(format!("{}/{}", self.base_url, method))
      .json(body)
      .send()
      .await
      // reqwest errors carry the url, which carries the token
      .map_err(|e| BotError::Transport { method, reason: e.without_url().to_string() })?;

    let status = response.status().as_u16();
    let text = response
      .text()
      .await
      .map_err(|e| BotError::Transport { method, reason: e.without_url().to_string() })?;

    parse_response(method, status, &text)
  }

  pub async fn get_updates(&self, offset: i64, timeout: Duration) -> Result<Vec<Update>, BotError> {
    let body = GetUpdates { offset, timeout: timeout.as_secs(), allowed_updates: vec!["message".to_string()] };
    self.call("getUpdates", &body).await
  }

  pub async fn send_message(&self, message: &SendMessage) -> Result<(), BotError> {
    let _sent: serde_json::Value = self.call("sendMessage", message).await?;
    Ok(())
  }

  pub async fn set_webhook(&self, url: &str, secret_token: &str) -> Result<(), BotError> {
    let body = SetWebhook {
      url: url.to_string(),
      secret_token: secret_token.to_string(),
      allowed_updates: vec!["message".to_string()]
    };
    let _: bool = self.call("setWebhook", &body).await?;
    Ok(())
  }

  /// Polling and webhooks are mutually exclusive on Telegram's side.
  pub async fn delete_webhook(&self) -> Result<(), BotError> {
    let _: bool = self.call("deleteWebhook", &serde_json::json!({ "drop_pending_updates": false })).await?;
    Ok(())
  }
}

fn parse_response<T: DeserializeOwned>(method: &'static str, status: u16, text: &str) -> Result<T, BotError> {
  let envelope: ApiResponse<T> = match serde_json::from_str(text) {
    Ok(env) => env,
    // non JSON bodies only come with transport level failures
    Err(e) if status == 200 => return Err(BotError::Parse { method, reason: e.to_string() }),
    Err(_) => return Err(BotError::Status { method, status, body: text.to_string() }),
  };

  if !envelope.ok {
    let description = envelope.description.unwrap_or_else(|| format!("error code {:?}", envelope.error_code));
    return Err(BotError::Api { method, description });
  }

  envelope.result.ok_or_else(|| BotError::Parse { method, reason: "ok response without result".to_string() })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ok_envelope_yields_result() {
    let result: bool = parse_response("setWebhook", 200, r#"{"ok":true,"result":true}"#).expect("ok");
    assert!(result);
  }

  #[test]
  fn api_failure_keeps_description() {
    let err = parse_response::<bool>("sendMessage", 400, r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#)
      .expect_err("api error");
    match err {
      BotError::Api { method, description } => {
        assert_eq!(method, "sendMessage");
        assert!(description.contains("chat not found"));
      },
      other => panic!("unexpected error {:?}", other),
    }
  }

  #[test]
  fn non_json_body_maps_to_status_error() {
    let err = parse_response::<bool>("getUpdates", 502, "<html>Bad Gateway</html>").expect_err("status error");
    assert!(matches!(err, BotError::Status { status: 502, .. }));

    let err = parse_response::<bool>("getUpdates", 200, "garbage").expect_err("parse error");
    assert!(matches!(err, BotError::Parse { .. }));
  }

  #[test]
  fn base_url_embeds_token() {
    let api = BotApi::new("123:abc", Duration::from_secs(30)).expect("client builds");
    assert_eq!(api.base_url, "https://api.telegram.org/bot123:abc");
  }
}
