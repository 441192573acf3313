use crate::telegram::types::{InlineKeyboardButton, InlineKeyboardMarkup, SendMessage, WebAppInfo};

pub const START_TEXT: &str = "Привет! Открой маркет:";
pub const OPEN_MARKET_LABEL: &str = "Открыть Маркет";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  Start { payload: Option<String> }
}

impl Command {
  /// "/start", "/start@some_bot" and "/start payload". Anything else is not a command we handle.
  pub fn parse(text: &str) -> Option<Command> {
    let text = text.trim();
    let (head, rest) = match text.split_once(char::is_whitespace) {
      Some((h, r)) => (h, r.trim()),
      None => (text, "")
    };
    let name = head.split_once('@').map(|(n, _)| n).unwrap_or(head);

    match name {
      "/start" => {
        let payload = if rest.is_empty() { None } else { Some(rest.to_string()) };
        Some(Command::Start { payload })
      },
      _ => None
    }
  }
}

pub fn start_keyboard(web_app_url: &str) -> InlineKeyboardMarkup {
  InlineKeyboardMarkup {
    inline_keyboard: vec![vec![InlineKeyboardButton {
      text: OPEN_MARKET_LABEL.to_string(),
      web_app: WebAppInfo { url: web_app_url.to_string() }
    }]]
  }
}

pub fn start_reply(chat_id: i64, web_app_url: &str) -> SendMessage {
  SendMessage {
    chat_id,
    text: START_TEXT.to_string(),
    reply_markup: Some(start_keyboard(web_app_url))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn parses_start_variants() {
    assert_eq!(Command::parse("/start"), Some(Command::Start { payload: None }));
    assert_eq!(Command::parse("  /start  "), Some(Command::Start { payload: None }));
    assert_eq!(Command::parse("/start@gift_market_bot"), Some(Command::Start { payload: None }));
    assert_eq!(Command::parse("/start ref_42"), Some(Command::Start { payload: Some("ref_42".to_string()) }));
    assert_eq!(Command::parse("/start@gift_market_bot ref_42"), Some(Command::Start { payload: Some("ref_42".to_string()) }));
  }

  #[test]
  fn ignores_other_text() {
    assert_eq!(Command::parse("hello"), None);
    assert_eq!(Command::parse("/help"), None);
    assert_eq!(Command::parse("/started"), None);
    assert_eq!(Command::parse(""), None);
  }

  #[test]
  fn start_reply_wire_shape() {
    let reply = start_reply(42, "https://sigmacoder122.github.io/my-gifts-app");
    let value = serde_json::to_value(&reply).expect("serializes");
    assert_eq!(value, json!({
      "chat_id": 42,
      "text": "Привет! Открой маркет:",
      "reply_markup": {
        "inline_keyboard": [[{
          "text": "Открыть Маркет",
          "web_app": { "url": "https://sigmacoder122.github.io/my-gifts-app" }
        }]]
      }
    }));
  }
}
