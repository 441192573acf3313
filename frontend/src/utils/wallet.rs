use dioxus::{document::{self, Eval}, logger::tracing::{info, error}};
use serde::{Deserialize, Serialize};

use rust_decimal::Decimal;

use super::{errors::AppError, invest::to_nanotons};

pub const TONCONNECT_MANIFEST_URL: &str = env!("TONCONNECT_MANIFEST_URL");
pub const INVEST_RECEIVER_ADDRESS: &str = env!("INVEST_RECEIVER_ADDRESS");

const TONCONNECT_SCRIPT: &str = "https://unpkg.com/@tonconnect/ui@2/dist/tonconnect-ui.min.js";
const BALANCE_STEP: u64 = 100;
const TX_TTL_SECS: u64 = 360;

/// "UQAbcdef...uvwxyz" style, short addresses pass through.
pub fn shorten_address(address: &str) -> String {
  let chars: Vec<char> = address.chars().collect();
  if chars.len() <= 12 {
    return address.to_string();
  }
  let head: String = chars[..6].iter().collect();
  let tail: String = chars[chars.len() - 6..].iter().collect();
  format!("{}...{}", head, tail)
}

/// Mock TON balance next to the connected wallet, moves in steps of 100 and never below 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceCounter(u64);

impl BalanceCounter {
  pub fn increment(self) -> Self {
    BalanceCounter(self.0.saturating_add(BALANCE_STEP))
  }

  pub fn decrement(self) -> Self {
    BalanceCounter(self.0.saturating_sub(BALANCE_STEP))
  }

  pub fn value(&self) -> u64 {
    self.0
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WalletState {
  Disconnected,
  Connected { address: String }
}

impl WalletState {
  pub fn from_address(address: Option<String>) -> Self {
    match address {
      Some(a) if !a.is_empty() => WalletState::Connected { address: a },
      _ => WalletState::Disconnected
    }
  }

  pub fn address(&self) -> Option<&str> {
    match self {
      WalletState::Connected { address } => Some(address),
      WalletState::Disconnected => None
    }
  }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionMessage {
  pub address: String,
  // nanotons as a decimal string, the wallet protocol wants strings
  pub amount: String
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
  pub valid_until: u64,
  pub messages: Vec<TransactionMessage>
}

impl TransactionRequest {
  pub fn single(to: &str, nanotons: u64, now_secs: u64) -> Self {
    TransactionRequest {
      valid_until: now_secs + TX_TTL_SECS,
      messages: vec![TransactionMessage { address: to.to_string(), amount: nanotons.to_string() }]
    }
  }
}

#[derive(Debug, Deserialize)]
struct TxOutcome {
  ok: bool,
  error: Option<String>
}

fn js_string(value: &str) -> String {
  // serde_json quoting doubles as JS string literal escaping
  serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

// shared preamble: lazily loads the widget script and keeps one TonConnectUI per page
fn with_ui(body: &str) -> String {
  format!(
    r#"
    if (!window.TON_CONNECT_UI) {{
      await new Promise((resolve, reject) => {{
        const scriptElem = document.createElement('script');
        scriptElem.src = {script};
        scriptElem.async = true;
        scriptElem.onload = resolve;
        scriptElem.onerror = () => reject(new Error('failed to load tonconnect ui'));
        document.head.appendChild(scriptElem);
      }});
    }}
    if (!window.__giftMarketTonConnect) {{
      window.__giftMarketTonConnect = new TON_CONNECT_UI.TonConnectUI({{ manifestUrl: {manifest} }});
    }}
    const ui = window.__giftMarketTonConnect;
    {body}
    "#,
    script = js_string(TONCONNECT_SCRIPT),
    manifest = js_string(TONCONNECT_MANIFEST_URL),
    body = body
  )
}

pub async fn current_account() -> Result<Option<String>, AppError> {
  document::eval(&with_ui("await ui.connectionRestored; return ui.account?.address ?? null;"))
    .join::<Option<String>>()
    .await
    .map_err(|e| AppError::InteropError(format!("{:?}", e)))
}

pub async fn connect() -> Result<(), AppError> {
  info!("opening TonConnect modal");
  document::eval(&with_ui("await ui.openModal(); return null;"))
    .join::<Option<String>>()
    .await
    .map(|_| ())
    .map_err(|e| AppError::InteropError(format!("{:?}", e)))
}

pub async fn disconnect() -> Result<(), AppError> {
  document::eval(&with_ui("if (ui.connected) { await ui.disconnect(); } return null;"))
    .join::<Option<String>>()
    .await
    .map(|_| ())
    .map_err(|e| AppError::WalletError(format!("{:?}", e)))
}

/// Long lived eval that pushes the account address (or null) on every status change.
pub fn watch_account() -> Eval {
  document::eval(&with_ui(
    r#"
    dioxus.send(ui.account?.address ?? null);
    ui.onStatusChange(wallet => dioxus.send(wallet?.account?.address ?? null));
    await new Promise(() => {});
    "#
  ))
}

pub async fn send_transaction(request: &TransactionRequest) -> Result<(), AppError> {
  let payload = serde_json::to_string(request).map_err(|e| AppError::WalletError(e.to_string()))?;
  let body = format!(
    r#"
    if (!ui.connected) {{ return {{ ok: false, error: "not connected" }}; }}
    try {{
      await ui.sendTransaction({payload});
      return {{ ok: true, error: null }};
    }} catch (e) {{
      return {{ ok: false, error: String(e?.message ?? e) }};
    }}
    "#,
    payload = payload
  );

  let outcome = document::eval(&with_ui(&body))
    .join::<TxOutcome>()
    .await
    .map_err(|e| AppError::InteropError(format!("{:?}", e)))?;

  if outcome.ok {
    info!("transaction request accepted by wallet");
    Ok(())
  } else {
    let reason = outcome.error.unwrap_or_else(|| "unknown".to_string());
    error!("wallet transaction failed: {}", reason);
    Err(AppError::WalletError(reason))
  }
}

/// Receiver for investment transfers, `None` keeps the flow alert-only.
pub fn invest_receiver() -> Option<&'static str> {
  let addr = INVEST_RECEIVER_ADDRESS.trim();
  if addr.is_empty() { None } else { Some(addr) }
}

/// Builds the transfer for a confirmed investment. Fails before touching the wallet.
pub fn investment_request(receiver: &str, amount: Decimal, state: &WalletState, now_secs: u64) -> Result<TransactionRequest, AppError> {
  if state.address().is_none() {
    return Err(AppError::WalletNotConnected);
  }
  let nanotons = to_nanotons(amount)?;
  Ok(TransactionRequest::single(receiver, nanotons, now_secs))
}

pub async fn pay_investment(receiver: &str, amount: Decimal, state: WalletState) -> Result<(), AppError> {
  let now_secs = (js_sys::Date::now() / 1_000.0) as u64;
  let request = investment_request(receiver, amount, &state, now_secs)?;
  info!("requesting {} TON transfer to {}", amount, shorten_address(receiver));
  send_transaction(&request).await
}
