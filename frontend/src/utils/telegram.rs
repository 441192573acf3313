use dioxus::{document, logger::tracing::{info, warn}};
use serde::Deserialize;

pub const MOCK_AVATAR: &str = "https://upload.wikimedia.org/wikipedia/commons/9/99/Sample_User_Icon.png";

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct TelegramUser {
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub username: Option<String>,
  pub photo_url: Option<String>,
}

impl TelegramUser {
  /// Stand-in user when the page is opened outside Telegram.
  pub fn mock() -> Self {
    TelegramUser {
      first_name: Some("Иван".to_string()),
      last_name: None,
      username: Some("ivan_dev".to_string()),
      photo_url: Some(MOCK_AVATAR.to_string()),
    }
  }

  pub fn handle(&self) -> String {
    match (&self.username, &self.first_name) {
      (Some(u), _) if !u.is_empty() => format!("@{}", u),
      (_, Some(f)) if !f.is_empty() => f.clone(),
      _ => "@nickname".to_string()
    }
  }

  pub fn avatar(&self) -> &str {
    self.photo_url.as_deref().filter(|u| !u.is_empty()).unwrap_or(MOCK_AVATAR)
  }
}

/// Tells the Telegram client the app is ready and asks for full height.
pub fn init_web_app() {
  document::eval(r#"
    const tg = window.Telegram?.WebApp;
    if (tg) {
      tg.ready();
      tg.expand();
    }
  "#);
}

pub async fn current_user() -> TelegramUser {
  let lookup = document::eval("return window.Telegram?.WebApp?.initDataUnsafe?.user ?? null;")
    .join::<Option<TelegramUser>>()
    .await;

  match lookup {
    Ok(Some(user)) => {
      info!("telegram user resolved: {}", user.handle());
      user
    },
    Ok(None) => TelegramUser::mock(),
    Err(e) => {
      warn!("telegram lookup failed, using mock user: {:?}", e);
      TelegramUser::mock()
    }
  }
}
