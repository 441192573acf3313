use std::fmt;
use dioxus::logger::tracing::warn;
use web_sys::window;

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  InvalidAmount(String),
  WalletNotConnected,
  WalletError(String),
  InteropError(String),
  ChartError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
      AppError::WalletNotConnected => write!(f, "Wallet is not connected"),
      AppError::WalletError(msg) => write!(f, "Wallet error: {}", msg),
      AppError::InteropError(msg) => write!(f, "JS interop error: {}", msg),
      AppError::ChartError(msg) => write!(f, "Chart error: {}", msg),
    }
  }
}

impl AppError {
  /// Text shown to the user in the blocking pop-up.
  pub fn user_message(&self) -> String {
    match self {
      AppError::InvalidAmount(_) => "Введите корректную сумму (больше 0).".to_string(),
      AppError::WalletNotConnected => "Сначала подключите кошелёк.".to_string(),
      AppError::WalletError(msg) => format!("Ошибка транзакции: {}", msg),
      other => other.to_string(),
    }
  }
}

/// Blocking browser alert. Logs instead when there is no window.
pub fn show_alert(message: &str) {
  match window() {
    Some(win) => {
      if let Err(e) = win.alert_with_message(message) {
        warn!("alert failed: {:?}", e);
      }
    },
    None => warn!("no window for alert: {}", message)
  }
}
