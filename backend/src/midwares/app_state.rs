use std::sync::Arc;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;

use crate::{config::Config, telegram::client::BotApi};

#[derive(Clone)]
pub struct AppState {
  pub config: Arc<Config>,
  pub api: BotApi,
  pub webhook_secret: Arc<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub enum AppError {
  Unauthorized(String),
  DeserializeError(String),
  InternalError(String),
}

impl IntoResponse for AppError {
  fn into_response(self) -> axum::response::Response {
    let (status, message) = match self {
      Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
      Self::DeserializeError(msg) => (StatusCode::BAD_REQUEST, msg),
      Self::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
    };

    let body = Json(json!({"error": message, "code": status.as_u16()}));

    (status, body).into_response()
  }
}
