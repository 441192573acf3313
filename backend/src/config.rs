use std::{fmt, net::SocketAddr, time::Duration};

pub const DEFAULT_WEB_APP_URL: &str = "https://sigmacoder122.github.io/my-gifts-app";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:7575";
pub const DEFAULT_APP_NAME: &str = "Gift Market";
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;
pub const WEBHOOK_PATH: &str = "/telegram/webhook";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
  #[error("{0} must be set")]
  Missing(&'static str),
  #[error("{key} has an invalid value: {value}")]
  Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BotMode {
  Polling,
  Webhook
}

#[derive(Clone, PartialEq)]
pub struct Config {
  pub bot_token: String,
  pub web_app_url: String,
  pub mode: BotMode,
  pub public_url: Option<String>,
  pub listen_addr: SocketAddr,
  pub app_name: String,
  pub app_icon_url: String,
  pub poll_timeout: Duration,
}

// token never reaches the logs
impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("bot_token", &"<redacted>")
      .field("web_app_url", &self.web_app_url)
      .field("mode", &self.mode)
      .field("public_url", &self.public_url)
      .field("listen_addr", &self.listen_addr)
      .field("app_name", &self.app_name)
      .field("app_icon_url", &self.app_icon_url)
      .field("poll_timeout", &self.poll_timeout)
      .finish()
  }
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds the config from any key lookup, empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>
  {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let bot_token = get("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;
    let web_app_url = get("WEB_APP_URL").unwrap_or_else(|| DEFAULT_WEB_APP_URL.to_string());

    let mode = match get("BOT_MODE").as_deref() {
      None | Some("polling") => BotMode::Polling,
      Some("webhook") => BotMode::Webhook,
      Some(other) => return Err(ConfigError::Invalid { key: "BOT_MODE", value: other.to_string() }),
    };

    let public_url = get("PUBLIC_URL").map(|u| u.trim_end_matches('/').to_string());
    if mode == BotMode::Webhook && public_url.is_none() {
      return Err(ConfigError::Missing("PUBLIC_URL"));
    }

    let listen_raw = get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
    let listen_addr = listen_raw.parse::<SocketAddr>()
      .map_err(|_| ConfigError::Invalid { key: "LISTEN_ADDR", value: listen_raw.clone() })?;

    let poll_timeout = match get("POLL_TIMEOUT_SECS") {
      Some(raw) => raw.parse::<u64>()
        .map_err(|_| ConfigError::Invalid { key: "POLL_TIMEOUT_SECS", value: raw.clone() })?,
      None => DEFAULT_POLL_TIMEOUT_SECS
    };

    let app_name = get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
    let app_icon_url = get("APP_ICON_URL").unwrap_or_else(|| format!("{}/icon.png", web_app_url.trim_end_matches('/')));

    Ok(Config {
      bot_token,
      web_app_url,
      mode,
      public_url,
      listen_addr,
      app_name,
      app_icon_url,
      poll_timeout: Duration::from_secs(poll_timeout),
    })
  }

  /// Full URL Telegram posts updates to, only meaningful in webhook mode.
  pub fn webhook_url(&self) -> Option<String> {
    self.public_url.as_ref().map(|base| format!("{}{}", base, WEBHOOK_PATH))
  }
}
