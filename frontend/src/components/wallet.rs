#![allow(non_snake_case)]

use dioxus::{logger::tracing::{info, error}, prelude::*};
use futures::StreamExt;

use crate::{
  components::icons::{Icon, IconKind},
  utils::{
    errors::show_alert,
    wallet::{connect, current_account, disconnect, shorten_address, BalanceCounter, WalletState}
  }
};

/// Connection state shared by the wallet control and the investment flow.
#[derive(Clone, Copy)]
pub struct WalletContext {
  pub state: Signal<WalletState>
}

enum WalletAction {
  Connect,
  Disconnect
}

#[component]
pub fn WalletControl() -> Element {
  let mut ctx = use_context::<WalletContext>();
  let mut balance = use_signal(BalanceCounter::default);

  let wallet_client = use_coroutine(move |mut rx| async move {
    while let Some(action) = rx.next().await {
      match action {
        WalletAction::Connect => {
          if let Err(e) = connect().await {
            error!("{}", e);
            show_alert(&e.user_message());
            continue;
          }
          // status subscription reports this too
          match current_account().await {
            Ok(addr) => ctx.state.set(WalletState::from_address(addr)),
            Err(e) => error!("{}", e)
          }
        },
        WalletAction::Disconnect => {
          match disconnect().await {
            Ok(()) => {
              info!("wallet disconnected");
              ctx.state.set(WalletState::Disconnected);
            },
            Err(e) => {
              error!("{}", e);
              show_alert(&e.user_message());
            }
          }
        }
      }
    }
  });

  let short = ctx.state.read().address().map(shorten_address);
  let amount = balance().value();

  rsx! {
    div {
      class: "wallet-control",
      div {
        class: "balance-counter",
        button {
          class: "balance-btn",
          onclick: move |_| balance.set(balance().decrement()),
          Icon { kind: IconKind::Minus, size: 16 }
        }
        span { class: "balance-value", "{amount} TON" }
        button {
          class: "balance-btn",
          onclick: move |_| balance.set(balance().increment()),
          Icon { kind: IconKind::Plus, size: 16 }
        }
      }
      {match short {
        Some(addr) => rsx! {
          div {
            class: "wallet-connected",
            Icon { kind: IconKind::Wallet, size: 18 }
            span { class: "wallet-address", "{addr}" }
            button {
              class: "wallet-btn secondary",
              onclick: move |_| wallet_client.send(WalletAction::Disconnect),
              "Отключить"
            }
          }
        },
        None => rsx! {
          button {
            class: "wallet-btn",
            onclick: move |_| wallet_client.send(WalletAction::Connect),
            Icon { kind: IconKind::Wallet, size: 18 }
            "Подключить кошелёк"
          }
        }
      }}
    }
  }
}
