use dioxus::prelude::*;

use crate::{
  components::{icons::{Icon, IconKind}, wallet::WalletControl},
  utils::{catalog::TON_LOGO, telegram::{current_user, TelegramUser}}
};

struct StatCard {
  label: &'static str,
  value: &'static str
}

const STATS: [StatCard; 3] = [
  StatCard { label: "Общий объём", value: "45 678 TON" },
  StatCard { label: "Общий прирост", value: "+12 345 TON" },
  StatCard { label: "Друзья приглашено", value: "23" },
];

#[component]
pub fn Profile() -> Element {
  static CSS: Asset = asset!("assets/profile.css");

  let user = use_resource(current_user);
  let profile = user.read().clone().unwrap_or_else(TelegramUser::mock);
  let avatar = profile.avatar().to_string();
  let handle = profile.handle();

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "profile-page",
      div {
        class: "top-row",
        div {
          class: "ton-balance",
          img { class: "ton-icon", src: TON_LOGO, alt: "TON" }
          "12 345 TON"
        }
        WalletControl {}
      }
      div {
        class: "center-profile",
        img { class: "avatar", src: avatar, alt: "Avatar" }
        h2 { class: "nickname", "{handle}" }
      }
      div {
        class: "stats-row",
        for stat in STATS.iter() {
          div {
            key: "{stat.label}",
            class: "stat-card",
            span { class: "stat-label", "{stat.label}" }
            span { class: "stat-value", "{stat.value}" }
          }
        }
      }
      div {
        class: "referral-card",
        h3 { class: "referral-title", "Приглашайте друзей" }
        p { class: "referral-text", "Зарабатывайте TON от их покупок" }
        div {
          class: "referral-row",
          div {
            class: "referral-info",
            span { class: "referral-percent", "20–50%" }
            span { class: "referral-description", "Реферальная комиссия" }
          }
          Icon { kind: IconKind::ArrowRight, size: 24 }
        }
        div {
          class: "cashback-row",
          span { class: "cashback-label", "Кэшбэк" }
          span { class: "cashback-desc", "Зарабатывайте деньги с покупок друзей" }
        }
        button { class: "invite-btn", "Пригласить друзей" }
      }
    }
  }
}
