use axum::{extract::{Request, State}, http::HeaderMap, middleware::Next, response::IntoResponse};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use super::app_state::{AppError, AppState};

pub const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";
const SECRET_LABEL: &str = "webhook-secret";

/// hex(HMAC-SHA256(key = bot token, "webhook-secret")), stable across restarts.
pub fn derive_webhook_secret(bot_token: &str) -> Result<String, AppError> {
  type HmacSha256 = Hmac<Sha256>;

  let mut mac = HmacSha256::new_from_slice(bot_token.as_bytes())
    .map_err(|e| AppError::InternalError(e.to_string()))?;
  mac.update(SECRET_LABEL.as_bytes());
  Ok(hex::encode(mac.finalize().into_bytes()))
}

// constant time so the comparison does not leak a prefix
fn secrets_match(given: &str, expected: &str) -> bool {
  let (a, b) = (given.as_bytes(), expected.as_bytes());
  a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub fn verify_secret(headers: &HeaderMap, expected: &str) -> Result<(), AppError> {
  let given = headers
    .get(SECRET_HEADER)
    .and_then(|v| v.to_str().ok())
    .ok_or_else(|| AppError::Unauthorized("Missing secret token".to_string()))?;

  if !secrets_match(given, expected) {
    return Err(AppError::Unauthorized("Invalid secret token".to_string()));
  }
  Ok(())
}

pub async fn webhook_auth(
  State(state): State<AppState>,
  req: Request,
  next: Next
) -> Result<impl IntoResponse, AppError> {
  if let Err(e) = verify_secret(req.headers(), &state.webhook_secret) {
    warn!("rejected webhook call to {}: {:?}", req.uri().path(), e);
    return Err(e);
  }
  Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::HeaderValue;

  #[test]
  fn secret_is_deterministic_hex() {
    let a = derive_webhook_secret("123:abc").expect("derives");
    let b = derive_webhook_secret("123:abc").expect("derives");
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, derive_webhook_secret("123:abd").expect("derives"));
  }

  #[test]
  fn accepts_matching_header() {
    let secret = derive_webhook_secret("t").expect("derives");
    let mut headers = HeaderMap::new();
    headers.insert(SECRET_HEADER, HeaderValue::from_str(&secret).expect("header value"));
    assert_eq!(verify_secret(&headers, &secret), Ok(()));
  }

  #[test]
  fn rejects_wrong_or_missing_header() {
    let secret = derive_webhook_secret("t").expect("derives");
    let mut headers = HeaderMap::new();
    assert!(matches!(verify_secret(&headers, &secret), Err(AppError::Unauthorized(_))));

    headers.insert(SECRET_HEADER, HeaderValue::from_static("nope"));
    assert!(matches!(verify_secret(&headers, &secret), Err(AppError::Unauthorized(_))));
  }

  #[test]
  fn comparison_checks_every_byte() {
    assert!(secrets_match("abcd", "abcd"));
    assert!(!secrets_match("abcd", "abce"));
    assert!(!secrets_match("abc", "abcd"));
  }
}
