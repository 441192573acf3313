#![allow(non_snake_case)]

use std::time::Duration;
use async_std::task::sleep;
use dioxus::{logger::tracing::{info, error}, prelude::*};
use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::{
  components::{chart::WeeklyChart, gift_card::GrowthBadge, icons::{Icon, IconKind}, wallet::WalletContext},
  utils::{
    catalog::{weekly_series, Gift, GIFT_WEEK, TON_LOGO},
    errors::{show_alert, AppError},
    invest::{amount_or_zero, normalize_amount_input, parse_amount, projected_gain, share_percent, EasedValue},
    splash::FRAME_MS,
    wallet::{invest_receiver, pay_investment}
  }
};

#[component]
pub fn GiftModal(gift: Gift, on_close: EventHandler<()>) -> Element {
  let mut show_invest = use_signal(|| false);
  let mut amount = use_signal(|| "0".to_string());
  let mut percent = use_signal(|| EasedValue::new(0.0));
  // bumped on every retarget, a loop started for an older value exits
  let mut generation = use_signal(|| 0_u64);
  let wallet = use_context::<WalletContext>();

  let price = gift.price;
  let growth = gift.growth;
  let name = gift.name.clone();
  let img = gift.img.clone();
  let canvas_id = format!("gift-chart-{}", gift.id);
  let points = weekly_series(price, &GIFT_WEEK);

  use_effect(move || {
    let target = share_percent(amount_or_zero(&amount()), price)
      .and_then(|pct| pct.to_f64())
      .unwrap_or(0.0);
    percent.write().retarget(target);
    let current_gen = *generation.peek() + 1;
    generation.set(current_gen);

    spawn(async move {
      loop {
        if *generation.peek() != current_gen {
          break;
        }
        let settled = {
          let mut eased = percent.write();
          eased.step();
          eased.is_settled()
        };
        if settled {
          break;
        }
        sleep(Duration::from_millis(FRAME_MS)).await;
      }
    });
  });

  let live_amount = amount_or_zero(&amount());
  let gain = projected_gain(live_amount, growth).unwrap_or(Decimal::ZERO);
  let percent_label = percent.read().display();

  let confirm = move |_: MouseEvent| {
    let checked = parse_amount(&amount()).and_then(|value| {
      share_percent(value, price)
        .map(|pct| (value, pct.round_dp(2)))
        .ok_or_else(|| AppError::InvalidAmount(format!("{} TON overflows the share", value)))
    });
    match checked {
      Ok((value, pct)) => {
        info!("investment confirmed: {} TON into gift {}", value, gift.id);
        show_alert(&format!("Вы инвестировали {} TON (~{}% подарка)", value, pct));

        if let Some(receiver) = invest_receiver() {
          let state = wallet.state.read().clone();
          spawn(async move {
            if let Err(e) = pay_investment(receiver, value, state).await {
              error!("{}", e);
              show_alert(&e.user_message());
            }
          });
        }
        amount.set("0".to_string());
        show_invest.set(false);
      },
      Err(e @ AppError::InvalidAmount(_)) => show_alert(&e.user_message()),
      Err(e) => error!("unexpected error on confirm: {}", e)
    }
  };

  rsx! {
    div {
      class: "modal-overlay",
      onclick: move |_| on_close.call(()),
      div {
        class: "modal-content",
        onclick: move |evt| evt.stop_propagation(),
        button { class: "modal-close", onclick: move |_| on_close.call(()), "×" }
        div {
          class: "modal-header",
          img { class: "modal-gift-img", src: img, alt: "{name}" }
          div {
            h2 { class: "modal-title", "{name}" }
            div {
              class: "modal-price",
              img { class: "ton-logo", src: TON_LOGO, alt: "TON" }
              span { "{price} TON" }
              GrowthBadge { growth: growth }
            }
          }
        }
        div {
          class: "modal-chart",
          h4 { "Динамика за неделю" }
          WeeklyChart { canvas_id: canvas_id, points: points }
        }
        if !show_invest() {
          button {
            class: "invest-btn",
            onclick: move |_| show_invest.set(true),
            Icon { kind: IconKind::Gift, size: 18 }
            "Инвестировать"
          }
        } else {
          div {
            class: "invest-panel",
            label { class: "invest-label", r#for: "invest-amount", "Сумма в TON" }
            input {
              id: "invest-amount",
              class: "invest-input",
              r#type: "text",
              inputmode: "decimal",
              value: "{amount}",
              oninput: move |evt| amount.set(normalize_amount_input(&evt.value()))
            }
            p { class: "invest-share", "Вы получите ~{percent_label}% акции подарка" }
            p { class: "invest-gain", "Прирост: {gain} TON ({growth}%)" }
            button {
              class: "invest-confirm",
              onclick: confirm,
              Icon { kind: IconKind::ArrowRight, size: 18 }
              "Подтвердить"
            }
          }
        }
      }
    }
  }
}
