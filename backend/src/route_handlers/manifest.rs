use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{config::Config, midwares::app_state::AppState};

/// TonConnect app manifest, fetched cross-origin by wallets.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TonConnectManifest {
  pub url: String,
  pub name: String,
  pub icon_url: String,
}

impl TonConnectManifest {
  pub fn from_config(config: &Config) -> Self {
    TonConnectManifest {
      url: config.web_app_url.clone(),
      name: config.app_name.clone(),
      icon_url: config.app_icon_url.clone(),
    }
  }
}

pub async fn manifest_handler(State(state): State<AppState>) -> Json<TonConnectManifest> {
  Json(TonConnectManifest::from_config(&state.config))
}

pub async fn health_handler() -> Json<Value> {
  Json(json!({"code": 200, "status": "ok"}))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config() -> Config {
    Config::from_lookup(|key| match key {
      "BOT_TOKEN" => Some("t".to_string()),
      "WEB_APP_URL" => Some("https://example.com/app".to_string()),
      "APP_NAME" => Some("Gifts".to_string()),
      _ => None
    }).expect("valid config")
  }

  #[test]
  fn manifest_uses_camel_case_keys() {
    let manifest = TonConnectManifest::from_config(&config());
    let value = serde_json::to_value(&manifest).expect("serializes");
    assert_eq!(value, json!({
      "url": "https://example.com/app",
      "name": "Gifts",
      "iconUrl": "https://example.com/app/icon.png"
    }));
  }

  #[tokio::test]
  async fn health_reports_ok() {
    let Json(body) = health_handler().await;
    assert_eq!(body["code"], 200);
    assert_eq!(body["status"], "ok");
  }
}
