use axum::{body::Bytes, extract::State, http::StatusCode};
use tracing::warn;

use crate::{bot::handle_update, midwares::app_state::{AppError, AppState}, telegram::types::Update};

/// Telegram delivers one update per POST. The secret header is checked by `webhook_auth` before this runs.
/// Always answers 200, Telegram redelivers anything else.
pub async fn webhook_handler(
  State(state): State<AppState>,
  body: Bytes
) -> StatusCode {
  match parse_update(&body) {
    Ok(update) => handle_update(&state.api, &update, &state.config.web_app_url).await,
    Err(e) => warn!("dropping malformed update {:?}: {:?}", String::from_utf8_lossy(&body), e)
  }
  StatusCode::OK
}

pub fn parse_update(body: &[u8]) -> Result<Update, AppError> {
  serde_json::from_slice::<Update>(body).map_err(|e| AppError::DeserializeError(e.to_string()))
}
