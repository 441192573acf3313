pub mod commands;
pub mod polling;

use tracing::{info, warn};

use crate::telegram::{client::BotApi, types::{SendMessage, Update}};
use commands::{start_reply, Command};

/// Reply for an update, `None` when the bot stays silent.
pub fn reply_for(update: &Update, web_app_url: &str) -> Option<SendMessage> {
  let message = update.message.as_ref()?;
  let text = message.text.as_deref()?;

  match Command::parse(text)? {
    Command::Start { payload } => {
      let who = message.from.as_ref().map(|u| u.id).unwrap_or(message.chat.id);
      info!(chat_id = message.chat.id, user_id = who, payload = ?payload, "handling /start");
      Some(start_reply(message.chat.id, web_app_url))
    }
  }
}

/// Shared by polling and webhook delivery. Send failures are logged, never retried.
pub async fn handle_update(api: &BotApi, update: &Update, web_app_url: &str) {
  if let Some(reply) = reply_for(update, web_app_url) {
    if let Err(e) = api.send_message(&reply).await {
      warn!(update_id = update.update_id, "failed to send reply: {}", e);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::telegram::types::{Chat, Message, User};

  fn update_with_text(text: Option<&str>) -> Update {
    Update {
      update_id: 1,
      message: Some(Message {
        message_id: 7,
        chat: Chat { id: 99 },
        from: Some(User { id: 99, first_name: "Anna".to_string(), username: None }),
        text: text.map(str::to_string),
      }),
    }
  }

  #[test]
  fn start_gets_the_market_button() {
    let reply = reply_for(&update_with_text(Some("/start")), "https://example.com/app").expect("reply");
    assert_eq!(reply.chat_id, 99);
    let keyboard = reply.reply_markup.expect("keyboard");
    assert_eq!(keyboard.inline_keyboard.len(), 1);
    assert_eq!(keyboard.inline_keyboard[0][0].web_app.url, "https://example.com/app");
  }

  #[test]
  fn other_updates_are_ignored() {
    assert!(reply_for(&update_with_text(Some("привет")), "u").is_none());
    assert!(reply_for(&update_with_text(None), "u").is_none());
    assert!(reply_for(&Update { update_id: 2, message: None }, "u").is_none());
  }
}
