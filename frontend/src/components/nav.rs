#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{components::icons::{Icon, IconKind}, Route};

static NAV_CSS: Asset = asset!("/assets/nav.css");

#[component]
pub fn TabBar() -> Element {
  rsx! {
    document::Stylesheet { href: NAV_CSS }
    main {
      class: "page-container",
      Outlet::<Route> {}
    }
    nav {
      class: "tab-bar",
      Link {
        class: "tab-item",
        active_class: "active",
        to: Route::Market {},
        Icon { kind: IconKind::ShoppingBag, size: 22 }
        span { "Маркет" }
      }
      Link {
        class: "tab-item",
        active_class: "active",
        to: Route::Portfolio {},
        Icon { kind: IconKind::Home, size: 22 }
        span { "Портфель" }
      }
      Link {
        class: "tab-item",
        active_class: "active",
        to: Route::GiftsStats {},
        Icon { kind: IconKind::PieChart, size: 22 }
        span { "Статистика" }
      }
      Link {
        class: "tab-item",
        active_class: "active",
        to: Route::Profile {},
        Icon { kind: IconKind::User, size: 22 }
        span { "Профиль" }
      }
    }
  }
}
