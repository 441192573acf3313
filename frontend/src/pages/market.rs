use dioxus::prelude::*;

use crate::{
  components::{gift_card::GiftCard, gift_modal::GiftModal},
  utils::catalog::{gifts, Gift, MarketSort, TON_LOGO}
};

#[component]
pub fn Market() -> Element {
  static CSS: Asset = asset!("assets/market.css");
  static MODAL_CSS: Asset = asset!("assets/modal.css");

  let mut sort = use_signal(|| MarketSort::PriceAsc);
  let mut selected: Signal<Option<Gift>> = use_signal(|| None);

  let sorted = use_memo(move || {
    let mut list = gifts();
    sort().apply(&mut list);
    list
  });

  rsx! {
    document::Stylesheet {href: CSS},
    document::Stylesheet {href: MODAL_CSS},
    div {
      class: "market-page",
      header {
        class: "market-header",
        h1 { class: "market-title", "Все подарки" }
        div {
          class: "balance-bubble",
          img { class: "ton-logo", src: TON_LOGO, alt: "TON" }
          span { "0 TON" }
        }
      }
      div {
        class: "market-toolbar",
        select {
          class: "sort-select",
          value: sort().value(),
          onchange: move |evt| sort.set(MarketSort::from_value(&evt.value())),
          option { value: "price", "По цене ↑" }
          option { value: "growth", "По росту ↓" }
        }
      }
      div {
        class: "gift-grid",
        for gift in sorted() {
          GiftCard {
            key: "{gift.id}",
            gift: gift.clone(),
            on_select: move |g: Gift| selected.set(Some(g))
          }
        }
      }
      if let Some(gift) = selected() {
        GiftModal {
          gift: gift,
          on_close: move |_| selected.set(None)
        }
      }
    }
  }
}
