#![allow(non_snake_case)]

use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::{components::icons::{Icon, IconKind}, utils::catalog::{Gift, TON_LOGO}};

#[component]
pub fn GrowthBadge(growth: Decimal) -> Element {
  let growing = growth >= Decimal::ZERO;
  let (class, kind) = if growing {
    ("growth-badge positive", IconKind::ArrowUp)
  } else {
    ("growth-badge negative", IconKind::ArrowDown)
  };
  let magnitude = growth.abs();

  rsx! {
    span {
      class: class,
      Icon { kind: kind, size: 14 }
      "{magnitude}%"
    }
  }
}

#[component]
pub fn GiftCard(gift: Gift, on_select: EventHandler<Gift>) -> Element {
  let name = gift.name.clone();
  let img = gift.img.clone();
  let price = gift.price;
  let growth = gift.growth;

  rsx! {
    div {
      class: "gift-card",
      onclick: move |_| on_select.call(gift.clone()),
      div {
        class: "gift-img-wrapper",
        img { class: "gift-img", src: img, alt: "{name}", loading: "lazy" }
      }
      div {
        class: "gift-info",
        h3 { class: "gift-name", "{name}" }
        div {
          class: "gift-meta",
          span {
            class: "gift-price",
            img { class: "ton-logo", src: TON_LOGO, alt: "TON" }
            "{price}"
          }
          GrowthBadge { growth: growth }
        }
      }
    }
  }
}
