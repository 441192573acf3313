//! Subset of the Bot API wire types the market bot reads or writes.

use serde::{Deserialize, Serialize};

/// Envelope every Bot API method answers with.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
  pub ok: bool,
  pub result: Option<T>,
  pub description: Option<String>,
  pub error_code: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Update {
  pub update_id: i64,
  pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Message {
  pub message_id: i64,
  pub chat: Chat,
  pub from: Option<User>,
  pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Chat {
  pub id: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
  pub id: i64,
  pub first_name: String,
  pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebAppInfo {
  pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InlineKeyboardButton {
  pub text: String,
  pub web_app: WebAppInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InlineKeyboardMarkup {
  pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendMessage {
  pub chat_id: i64,
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GetUpdates {
  pub offset: i64,
  pub timeout: u64,
  pub allowed_updates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SetWebhook {
  pub url: String,
  pub secret_token: String,
  pub allowed_updates: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_a_start_update() {
    let raw = r#"{
      "ok": true,
      "result": [{
        "update_id": 10,
        "message": {
          "message_id": 5,
          "date": 1700000000,
          "chat": {"id": 42, "type": "private"},
          "from": {"id": 42, "is_bot": false, "first_name": "Anna", "username": "anna"},
          "text": "/start"
        }
      }, {
        "update_id": 11,
        "edited_message": {"message_id": 6}
      }]
    }"#;
    let resp: ApiResponse<Vec<Update>> = serde_json::from_str(raw).expect("valid updates");
    let updates = resp.result.expect("result present");
    assert_eq!(updates.len(), 2);
    let msg = updates[0].message.as_ref().expect("message");
    assert_eq!(msg.chat.id, 42);
    assert_eq!(msg.text.as_deref(), Some("/start"));
    assert!(updates[1].message.is_none());
  }

  #[test]
  fn parses_an_error_envelope() {
    let raw = r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#;
    let resp: ApiResponse<bool> = serde_json::from_str(raw).expect("valid envelope");
    assert!(!resp.ok);
    assert_eq!(resp.error_code, Some(401));
    assert_eq!(resp.description.as_deref(), Some("Unauthorized"));
  }
}
