use dioxus::prelude::*;

use crate::{
  components::{chart::WeeklyChart, gift_card::GrowthBadge},
  utils::{
    catalog::{gifts, weekly_series, Gift, SortConfig, SortKey, PORTFOLIO_WEEK, TON_LOGO},
    portfolio::{format_thousands, invested_label, mock_growth_percent, seed_portfolio, total_invested},
    telegram::{current_user, TelegramUser}
  }
};

#[component]
pub fn Portfolio() -> Element {
  static CSS: Asset = asset!("assets/portfolio.css");

  // one seed per mount, renders reuse it
  let seed = use_hook(|| js_sys::Date::now() as u64);
  // catalog order until the user picks a column
  let mut holdings: Signal<Vec<Gift>> = use_signal(move || seed_portfolio(&gifts(), seed));
  let mut sort_config = use_signal(SortConfig::default);
  let user = use_resource(current_user);

  let mut request_sort = move |key: SortKey| {
    let next = sort_config.peek().request(key);
    next.apply(&mut holdings.write());
    sort_config.set(next);
  };

  let total = total_invested(&holdings.read());
  let total_label = format_thousands(total);
  let growth_pct = mock_growth_percent(seed);
  let count = holdings.read().len();
  let points = weekly_series(total, &PORTFOLIO_WEEK);

  let profile = user.read().clone().unwrap_or_else(TelegramUser::mock);
  let avatar = profile.avatar().to_string();
  let handle = profile.handle();

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "portfolio-page",
      header {
        class: "portfolio-header",
        img { class: "avatar", src: avatar, alt: "avatar" }
        h2 { class: "username", "{handle}" }
      }
      section {
        class: "stats-container",
        div {
          class: "stat-block",
          span { class: "stat-label", "Всего инвестировано" }
          span {
            class: "stat-value",
            "{total_label} TON"
            img { class: "ton-logo", src: TON_LOGO, alt: "TON" }
          }
        }
        div {
          class: "stat-block",
          span { class: "stat-label", "Рост портфеля" }
          span { class: "stat-value positive", "+{growth_pct}%" }
        }
        div {
          class: "stat-block",
          span { class: "stat-label", "Подарков" }
          span { class: "stat-value", "{count}" }
        }
      }
      div {
        class: "portfolio-chart",
        WeeklyChart { canvas_id: "portfolio-chart".to_string(), points: points, color: "#4ea3ff".to_string(), show_dots: false }
      }
      div {
        class: "sort-buttons",
        button { class: "sort-btn", onclick: move |_| request_sort(SortKey::Name), "Сортировать по названию" }
        button { class: "sort-btn", onclick: move |_| request_sort(SortKey::Growth), "По росту" }
        button { class: "sort-btn", onclick: move |_| request_sort(SortKey::Invested), "По инвестициям" }
      }
      div {
        class: "holdings-table",
        div {
          class: "table-header",
          div { class: "col-name", "Название" }
          div { class: "col-num", "Инвестиции" }
          div { class: "col-num", "Рост" }
        }
        for gift in holdings() {
          div {
            key: "{gift.id}",
            class: "table-row",
            div {
              class: "col-name",
              img { class: "row-img", src: gift.img.clone(), alt: "{gift.name}" }
              span { "{gift.name}" }
            }
            div { class: "col-num", {invested_label(&gift)} }
            div { class: "col-num", GrowthBadge { growth: gift.growth } }
          }
        }
      }
    }
  }
}
